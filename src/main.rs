use anyhow::Context;
use attr_init::adapters::host;
use attr_init::config::toml_config::TomlConfig;
use attr_init::core::{Diagnostic, DiagnosticSink};
use attr_init::utils::error::ErrorSeverity;
use attr_init::utils::{logger, validation::Validate};
use attr_init::{AttrInitError, AttrInitPass, CliConfig, ModelDocument, RunSettings, TracingSink};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file_config = match cli.config.as_deref() {
        Some(path) => TomlConfig::from_file(path).with_context(|| format!("Failed to load config file '{}'", path))?,
        None => TomlConfig::default(),
    };
    file_config.validate().context("Invalid settings file")?;

    let settings = RunSettings::from_file_config(&file_config)?.apply_cli(&cli);

    if settings.json_logs {
        logger::init_json_logger(settings.verbose);
    } else {
        logger::init_cli_logger(settings.verbose);
    }
    tracing::debug!("Effective settings: {:?}", settings);

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = execute(&settings) {
        tracing::error!(
            "❌ Initializer generation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn execute(settings: &RunSettings) -> attr_init::Result<()> {
    let Some(input) = settings.input.as_deref() else {
        return Err(AttrInitError::MissingConfigError {
            field: "input".to_string(),
        });
    };

    let mut document = ModelDocument::from_file(input)?;
    tracing::info!("📁 Loaded {} classes from {}", document.classes.len(), input);

    if settings.dry_run {
        print_survey(&document);
        return Ok(());
    }

    let mut sink = TracingSink;
    let pass = AttrInitPass::new(settings.options);
    let report = pass.run(&mut document.classes, &mut sink)?;

    let marked = host::acknowledge(&mut document.classes, &report.acknowledged);
    tracing::debug!("Acknowledged {} customizations", marked);

    for (id, customization) in host::unrecognized(&document.classes) {
        let message = format!(
            "unrecognized customization <{}> in namespace {} on {}",
            customization.tag, customization.namespace, id
        );
        sink.warning(&Diagnostic::warning(message, customization.location.clone()))?;
    }

    let report = report.into_result()?;

    match settings.output.as_deref() {
        Some(path) => {
            document.write_to(path, settings.pretty)?;
            tracing::info!("✅ {} initializers injected; model saved to {}", report.injected().count(), path);
        }
        None => println!("{}", document.to_json_string(settings.pretty)?),
    }

    Ok(())
}

fn print_survey(document: &ModelDocument) {
    let planned = AttrInitPass::survey(&document.classes);
    println!("🔍 Dry run: {} field(s) carry an initializer customization", planned.len());
    for field in planned {
        let extra = if field.customizations > 1 {
            format!(" ({} customizations, only the first is used)", field.customizations)
        } else {
            String::new()
        };
        println!("  {}.{}{}", field.class, field.field, extra);
    }
}
