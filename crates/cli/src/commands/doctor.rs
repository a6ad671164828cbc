use std::sync::Arc;
use std::time::Instant;

use lounge_agent::{client_from_config, OfflineClient, PairingService};
use lounge_core::config::{AppConfig, LlmProvider, LoadOptions};
use lounge_core::{Catalog, PairingSection};
use serde::Serialize;

use crate::commands::CommandResult;

pub const EXIT_DOCTOR: u8 = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    elapsed_ms: u64,
    message: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    command: &'static str,
    status: CheckStatus,
    summary: String,
    total_elapsed_ms: u64,
    checks: Vec<DoctorCheck>,
}

pub fn run(json: bool) -> CommandResult {
    let started = Instant::now();
    let mut checks = Vec::new();

    let config = match timed_check(|| AppConfig::load(LoadOptions::default())) {
        Ok((elapsed_ms, config)) => {
            checks.push(pass("config_validation", elapsed_ms, "configuration loaded and validated"));
            crate::init_logging(&config);
            config
        }
        Err((elapsed_ms, error)) => {
            checks.push(fail("config_validation", elapsed_ms, error.to_string()));
            checks.push(skipped("catalog_load"));
            checks.push(skipped("llm_credentials"));
            checks.push(skipped("pairing_fallback"));
            return finalize_report(checks, elapsed_since(started), json);
        }
    };

    let catalog = match timed_check(|| Catalog::load(&config.catalog.path)) {
        Ok((elapsed_ms, catalog)) => {
            let message = format!(
                "{} cocktails, {} snacks, {} drink categories from `{}`",
                catalog.cocktails().len(),
                catalog.snacks().len(),
                catalog.drinks().len(),
                config.catalog.path.display()
            );
            checks.push(pass("catalog_load", elapsed_ms, message));
            Some(Arc::new(catalog))
        }
        Err((elapsed_ms, error)) => {
            checks.push(fail("catalog_load", elapsed_ms, error.to_string()));
            None
        }
    };

    checks.push(match timed_check(|| client_from_config(&config.llm)) {
        Ok((elapsed_ms, _)) => {
            let message = match config.llm.provider {
                LlmProvider::Gemini => {
                    format!("gemini client ready for model `{}`", config.llm.model)
                }
                LlmProvider::Offline => {
                    "offline provider configured; pairings use the house fallback".to_string()
                }
            };
            pass("llm_credentials", elapsed_ms, message)
        }
        Err((elapsed_ms, error)) => fail("llm_credentials", elapsed_ms, error.to_string()),
    });

    match catalog {
        Some(catalog) => checks.push(fallback_check(&config, catalog)),
        None => checks.push(skipped("pairing_fallback")),
    }

    finalize_report(checks, elapsed_since(started), json)
}

fn fallback_check(config: &AppConfig, catalog: Arc<Catalog>) -> DoctorCheck {
    let started = Instant::now();
    let Some(item) = catalog.cocktails().first().or_else(|| catalog.snacks().first()).cloned()
    else {
        return fail("pairing_fallback", elapsed_since(started), "catalog has no pairable items");
    };
    let section = PairingSection::from_is_cocktail(item.category.is_some());
    let lang = config.menu.default_language;

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(error) => {
            return fail(
                "pairing_fallback",
                elapsed_since(started),
                format!("failed to initialize async runtime: {error}"),
            )
        }
    };
    let service = PairingService::new(Arc::new(OfflineClient), catalog.clone())
        .with_venue(config.menu.venue_name.clone());
    let recommendation = runtime.block_on(service.recommend(&item, section, lang));

    let suggested_from_pool = catalog
        .pairing_pool(section)
        .iter()
        .any(|candidate| candidate.display_name(lang) == recommendation.suggested_item);
    if suggested_from_pool {
        pass(
            "pairing_fallback",
            elapsed_since(started),
            format!("{} pairs with {}", item.display_name(lang), recommendation.suggested_item),
        )
    } else {
        fail(
            "pairing_fallback",
            elapsed_since(started),
            format!("no house pairing available for {}", item.display_name(lang)),
        )
    }
}

fn timed_check<T, E>(check: impl FnOnce() -> Result<T, E>) -> Result<(u64, T), (u64, E)> {
    let started = Instant::now();
    match check() {
        Ok(value) => Ok((elapsed_since(started), value)),
        Err(error) => Err((elapsed_since(started), error)),
    }
}

fn elapsed_since(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

fn pass(name: &'static str, elapsed_ms: u64, message: impl Into<String>) -> DoctorCheck {
    DoctorCheck { name, status: CheckStatus::Pass, elapsed_ms, message: message.into() }
}

fn fail(name: &'static str, elapsed_ms: u64, message: impl Into<String>) -> DoctorCheck {
    DoctorCheck { name, status: CheckStatus::Fail, elapsed_ms, message: message.into() }
}

fn skipped(name: &'static str) -> DoctorCheck {
    DoctorCheck {
        name,
        status: CheckStatus::Skipped,
        elapsed_ms: 0,
        message: "skipped due to previous failure".to_string(),
    }
}

fn finalize_report(checks: Vec<DoctorCheck>, total_elapsed_ms: u64, json: bool) -> CommandResult {
    let passed = checks.iter().filter(|check| check.status == CheckStatus::Pass).count();
    let total = checks.len();
    let failed = checks.iter().any(|check| check.status == CheckStatus::Fail);

    let report = DoctorReport {
        command: "doctor",
        status: if failed { CheckStatus::Fail } else { CheckStatus::Pass },
        summary: format!("doctor: {passed}/{total} checks passed in {total_elapsed_ms}ms"),
        total_elapsed_ms,
        checks,
    };
    let exit_code = if failed { EXIT_DOCTOR } else { 0 };

    if json {
        let machine = serde_json::to_string(&report).unwrap_or_else(|error| {
            format!(
                "{{\"command\":\"doctor\",\"status\":\"fail\",\"summary\":\"serialization failed\",\"error\":\"{}\"}}",
                error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
            )
        });
        return CommandResult { exit_code, output: machine };
    }

    let mut lines = vec![report.summary.clone()];
    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "FAIL",
            CheckStatus::Skipped => "skip",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.message));
    }
    CommandResult { exit_code, output: lines.join("\n") }
}
