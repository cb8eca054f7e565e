use anyhow::Result;
use attr_init::adapters::host;
use attr_init::config::toml_config::TomlConfig;
use attr_init::utils::validation::Validate;
use attr_init::{AttrInitPass, CollectingSink, ExtractionPolicy, ModelDocument, RunSettings};
use tempfile::TempDir;

const MODEL: &str = r#"{
  "classes": [
    {
      "name": "MailServer",
      "fields": [
        {
          "name": "protocol",
          "property": { "kind": "attribute", "default": " imap " },
          "customizations": [
            { "namespace": "urn:attr-init:customization", "tag": "attrinit" },
            { "namespace": "urn:attr-init:customization", "tag": "attr-init" },
            { "namespace": "urn:example:annotate", "tag": "annotate" }
          ],
          "declaration": {
            "ty": {
              "enum": {
                "name": "Protocol",
                "constants": [
                  { "value": "pop3", "constant": "Pop3" },
                  { "value": "imap", "constant": "Imap" }
                ]
              }
            }
          }
        },
        {
          "name": "secure",
          "property": { "kind": "attribute", "default": "1" },
          "customizations": [
            { "namespace": "urn:attr-init:customization", "tag": "attrinit" }
          ],
          "declaration": { "ty": "boolean", "initializer": { "expr": "bool", "value": false } }
        },
        {
          "name": "ratio",
          "property": { "kind": "attribute", "default": "0.750" },
          "customizations": [
            { "namespace": "urn:attr-init:customization", "tag": "attrinit" }
          ],
          "declaration": { "ty": "decimal" }
        }
      ]
    }
  ]
}"#;

#[test]
fn test_model_file_round_trip_with_acknowledgement() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("classes.json");
    let output = temp_dir.path().join("generated/classes.json");
    std::fs::write(&input, MODEL)?;

    let mut document = ModelDocument::from_file(&input)?;
    let mut sink = CollectingSink::new();
    let pass = AttrInitPass::new(attr_init::PassOptions::enabled(ExtractionPolicy::SchemaDefault));
    let report = pass.run(&mut document.classes, &mut sink)?;

    assert!(report.is_success());
    assert_eq!(report.injected().count(), 3);
    assert_eq!(host::acknowledge(&mut document.classes, &report.acknowledged), 3);

    let leftovers = host::unrecognized(&document.classes);
    assert_eq!(leftovers.len(), 1);
    assert_eq!(leftovers[0].1.tag, "attr-init");

    document.write_to(&output, true)?;
    let written = ModelDocument::from_file(&output)?;
    let class = &written.classes[0];

    let rendered: Vec<String> = class
        .fields
        .iter()
        .filter_map(|f| f.initializer().map(ToString::to_string))
        .collect();
    assert_eq!(rendered, vec!["Protocol::Imap", "true", "0.75"]);
    assert!(class.fields[0].customizations[0].acknowledged);
    assert!(!class.fields[0].customizations[1].acknowledged);
    assert!(!class.fields[0].customizations[2].acknowledged);
    Ok(())
}

#[test]
fn test_settings_from_file_drive_the_pass() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("attr-init.toml");
    std::fs::write(
        &config_path,
        r#"
[pass]
enabled = true
policy = "schema-default"

[input]
model = "classes.json"

[output]
pretty = true
"#,
    )?;

    let file_config = TomlConfig::from_file(&config_path)?;
    file_config.validate()?;
    let settings = RunSettings::from_file_config(&file_config)?;
    settings.validate()?;

    assert!(settings.options.enabled);
    assert!(settings.pretty);

    let mut document = ModelDocument::from_json_str(MODEL)?;
    let report = AttrInitPass::new(settings.options).run(&mut document.classes, &mut CollectingSink::new())?;
    assert_eq!(report.fields.len(), 3);
    Ok(())
}

#[test]
fn test_survey_reports_without_mutating() -> Result<()> {
    let document = ModelDocument::from_json_str(MODEL)?;
    let planned = AttrInitPass::survey(&document.classes);

    let names: Vec<(&str, usize)> = planned
        .iter()
        .map(|p| (p.field.as_str(), p.customizations))
        .collect();
    assert_eq!(names, vec![("protocol", 1), ("secure", 1), ("ratio", 1)]);
    assert_eq!(document, ModelDocument::from_json_str(MODEL)?);
    Ok(())
}
