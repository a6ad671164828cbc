use lounge_core::{Language, MenuItem, PairingSection};
use serde_json::{json, Value};

/// Sommelier instruction for pairing `item` with exactly one of `candidates`.
///
/// `candidates` must already be the complementary section; their localized
/// names are enumerated verbatim so the answer can be checked against them.
pub fn build_prompt(
    item: &MenuItem,
    section: PairingSection,
    lang: Language,
    candidates: &[MenuItem],
    venue: &str,
) -> String {
    let name = item.display_name(lang);
    let details = item
        .details(lang)
        .map(|details| match lang {
            Language::Es => format!("Detalles del producto: {details}.\n"),
            Language::En => format!("Product details: {details}.\n"),
        })
        .unwrap_or_default();
    let options = candidates
        .iter()
        .map(|candidate| format!("\"{}\"", candidate.display_name(lang)))
        .collect::<Vec<_>>()
        .join(", ");
    let label = section.label(lang);
    let pool_label = section.complement().plural_label(lang);

    match lang {
        Language::Es => format!(
            "Eres el sommelier y mixólogo de \"{venue}\". Tu tarea es recomendar el maridaje perfecto a un cliente.\n\
             \n\
             El cliente ha elegido: \"{name}\" ({label}).\n\
             {details}\
             \n\
             Elige el acompañamiento EXCLUSIVAMENTE de esta lista de {pool_label}: [{options}].\n\
             El campo suggestedItem debe ser exactamente uno de los nombres de la lista, escrito tal cual.\n\
             \n\
             Explica la armonía de sabores de forma elegante, breve y profesional.\n\
             Responde siempre en español."
        ),
        Language::En => format!(
            "You are the sommelier and mixologist at \"{venue}\". Your task is to recommend the perfect pairing to a guest.\n\
             \n\
             The guest has chosen: \"{name}\" ({label}).\n\
             {details}\
             \n\
             Choose the accompaniment EXCLUSIVELY from this list of {pool_label}: [{options}].\n\
             The suggestedItem field must be exactly one of the names in the list, spelled as written.\n\
             \n\
             Explain the harmony of flavors in an elegant, brief and professional way.\n\
             Always respond in English."
        ),
    }
}

/// Structured-output contract: three required string fields.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "suggestedItem": {
                "type": "STRING",
                "description": "Name of the recommended item, copied from the provided list",
            },
            "recommendation": {
                "type": "STRING",
                "description": "Short, elegant pairing recommendation",
            },
            "reason": {
                "type": "STRING",
                "description": "Brief justification of the flavor harmony",
            },
        },
        "required": ["suggestedItem", "recommendation", "reason"],
    })
}

#[cfg(test)]
mod tests {
    use lounge_core::{Language, MenuItem, MenuItemId, PairingSection};

    use super::{build_prompt, response_schema};

    fn item(id: &str, name: &str, name_en: Option<&str>) -> MenuItem {
        MenuItem {
            id: MenuItemId::new(id),
            name: name.to_string(),
            name_en: name_en.map(str::to_string),
            description: None,
            description_en: None,
            price: "6,00 €".to_string(),
            ingredients: Some(vec!["Ginebra".to_string(), "Pepino".to_string()]),
            ingredients_en: None,
            history: None,
            history_en: None,
            tags: None,
            tags_en: None,
            image: None,
            video: None,
            category: None,
        }
    }

    #[test]
    fn english_prompt_enumerates_localized_candidates() {
        let gin = item("gin", "Gin del Jardín", Some("Garden Gin"));
        let snacks =
            [item("olivas", "Aceitunas", Some("Olives")), item("croquetas", "Croquetas", None)];

        let prompt =
            build_prompt(&gin, PairingSection::Cocktail, Language::En, &snacks, "The Lounge");

        assert!(prompt.contains("\"Garden Gin\" (Cocktail)"));
        assert!(prompt.contains("list of Snacks: [\"Olives\", \"Croquetas\"]"));
        assert!(prompt.contains("Product details: Ginebra, Pepino."));
        assert!(prompt.contains("Always respond in English."));
    }

    #[test]
    fn spanish_prompt_uses_base_names() {
        let olives = item("olivas", "Aceitunas", Some("Olives"));
        let cocktails = [item("gin", "Gin del Jardín", Some("Garden Gin"))];

        let prompt =
            build_prompt(&olives, PairingSection::Snack, Language::Es, &cocktails, "The Lounge");

        assert!(prompt.contains("\"Aceitunas\" (Snack)"));
        assert!(prompt.contains("lista de Cócteles: [\"Gin del Jardín\"]"));
        assert!(prompt.contains("Responde siempre en español."));
    }

    #[test]
    fn prompt_omits_details_line_when_item_has_none() {
        let bare = MenuItem { ingredients: None, ..item("pan", "Pan de Cristal", None) };
        let cocktails = [item("gin", "Gin del Jardín", Some("Garden Gin"))];

        let spanish =
            build_prompt(&bare, PairingSection::Snack, Language::Es, &cocktails, "The Lounge");
        assert!(!spanish.contains("Detalles del producto"));
        assert!(spanish.contains("\"Pan de Cristal\" (Snack).\n\nElige"));

        let english =
            build_prompt(&bare, PairingSection::Snack, Language::En, &cocktails, "The Lounge");
        assert!(!english.contains("Product details"));
    }

    #[test]
    fn schema_requires_all_three_fields() {
        let schema = response_schema();
        assert_eq!(schema["required"].as_array().map(Vec::len), Some(3));
        assert_eq!(schema["properties"]["reason"]["type"], "STRING");
    }
}
