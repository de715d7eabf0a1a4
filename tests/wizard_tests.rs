mod utils;

use acfgen::cli::{run_create, run_setup, CreateArgs, RunOutcome, SetupArgs};
use acfgen::config::Settings;
use acfgen::error::Error;
use acfgen::group::{FieldType, LocationWhen, Operator};
use acfgen::wizard::{WizardController, WizardOutcome};
use test_log::test;
use utils::ScriptedPrompter;

/// Answers for a run that collects one required text field and accepts.
fn one_field_prompter(accept: bool) -> ScriptedPrompter {
    ScriptedPrompter::new(
        // group slug, location value, field slug, field label
        &["product", "product", "title", "Title"],
        // location when, operator, field type
        &["post_type", "==", "text"],
        // required, add another, final confirm
        &[true, false, accept],
    )
}

#[test]
fn accepted_run_collects_the_group() {
    let prompter = one_field_prompter(true);
    let outcome = WizardController::new(&prompter).run().unwrap();

    let group = match outcome {
        WizardOutcome::Accepted(group) => group,
        WizardOutcome::Aborted => panic!("run should have been accepted"),
    };

    assert_eq!(group.slug, "product");
    assert_eq!(group.location.when, LocationWhen::PostType);
    assert_eq!(group.location.operator, Operator::Equals);
    assert_eq!(group.location.value, "product");
    assert_eq!(group.fields.len(), 1);
    assert_eq!(group.fields[0].r#type, FieldType::Text);
    assert_eq!(group.fields[0].slug, "title");
    assert_eq!(group.fields[0].label, "Title");
    assert!(group.fields[0].required);

    assert_eq!(prompter.recap_count(), 1);
}

#[test]
fn declining_the_final_gate_aborts() {
    let prompter = one_field_prompter(false);
    let outcome = WizardController::new(&prompter).run().unwrap();
    assert!(matches!(outcome, WizardOutcome::Aborted));
    assert_eq!(prompter.recap_count(), 1);
}

#[test]
fn field_count_follows_add_another_answers() {
    // Three fields: "add another?" answered true twice, then false.
    let prompter = ScriptedPrompter::new(
        &["page", "default", "title", "Title", "intro", "Intro", "cover", "Cover"],
        &["page_template", "!=", "text", "wysiwyg", "image"],
        // (required, add another) per field, then the final confirm
        &[true, true, false, true, false, false, true],
    );
    let outcome = WizardController::new(&prompter).run().unwrap();

    let group = match outcome {
        WizardOutcome::Accepted(group) => group,
        WizardOutcome::Aborted => panic!("run should have been accepted"),
    };

    assert_eq!(group.fields.len(), 3);
    // Insertion order is preserved.
    let slugs: Vec<&str> = group.fields.iter().map(|f| f.slug.as_str()).collect();
    assert_eq!(slugs, ["title", "intro", "cover"]);
    assert_eq!(group.fields[1].r#type, FieldType::Wysiwyg);
    assert!(!group.fields[1].required);
}

#[test]
fn unknown_choice_answer_is_an_invalid_selection() {
    let prompter = ScriptedPrompter::new(&["product"], &["repeater"], &[]);
    let err = WizardController::new(&prompter).run().unwrap_err();
    assert!(matches!(err, Error::InvalidSelection { .. }));
}

fn settings_fixture() -> (tempfile::TempDir, CreateArgs) {
    let dir = tempfile::tempdir().unwrap();
    let theme = dir.path().join("theme");
    let config = dir.path().join("config/config.yml");
    Settings::new(&theme).save(&config).unwrap();
    (dir, CreateArgs { config, stub: None, verbose: 0 })
}

#[test]
fn create_writes_the_artifact_under_the_theme() {
    let (dir, args) = settings_fixture();
    let prompter = one_field_prompter(true);

    let outcome = run_create(&args, &prompter).unwrap();
    assert_eq!(outcome, RunOutcome::Completed);

    let artifact = dir.path().join("theme/app/ACFGroups/Product.php");
    let contents = std::fs::read_to_string(&artifact).unwrap();

    assert!(contents.contains("class ProductACFGroup"));
    assert!(contents.contains("new FieldsBuilder('product')"));
    assert!(contents.contains("setLocation('post_type', '==', 'product')"));
    assert!(contents.contains("->addText("));
    assert!(contents.contains("'title'"));
    assert!(contents.contains("'label'    => 'Title'"));
    assert!(contents.contains("'required' => 1"));
    // All placeholder tokens were substituted.
    assert!(!contents.contains("Dummy"));
    assert!(!contents.contains("dummy_"));
}

#[test]
fn aborted_create_writes_nothing() {
    let (dir, args) = settings_fixture();
    let prompter = one_field_prompter(false);

    let outcome = run_create(&args, &prompter).unwrap();
    assert_eq!(outcome, RunOutcome::Aborted);
    assert!(!dir.path().join("theme/app").exists());
}

#[test]
fn missing_settings_abort_before_any_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let args = CreateArgs {
        config: dir.path().join("config/config.yml"),
        stub: None,
        verbose: 0,
    };
    let prompter = one_field_prompter(true);

    let err = run_create(&args, &prompter).unwrap_err();
    assert!(matches!(err, Error::MissingConfiguration { .. }));
    assert_eq!(prompter.prompts_seen(), 0);
    assert!(!dir.path().join("theme").exists());
}

#[test]
fn confirmed_setup_persists_the_theme_path() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config/config.yml");
    let args = SetupArgs { config: config.clone(), verbose: 0 };
    let prompter = ScriptedPrompter::new(&["/srv/www/themes/shop"], &[], &[true]);

    let outcome = run_setup(&args, &prompter).unwrap();
    assert_eq!(outcome, RunOutcome::Completed);

    let settings = Settings::load(&config).unwrap();
    assert_eq!(settings, Settings::new("/srv/www/themes/shop"));
}

#[test]
fn declined_setup_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config/config.yml");
    let args = SetupArgs { config: config.clone(), verbose: 0 };
    let prompter = ScriptedPrompter::new(&["/srv/www/themes/shop"], &[], &[false]);

    let outcome = run_setup(&args, &prompter).unwrap();
    assert_eq!(outcome, RunOutcome::Aborted);
    assert!(!config.exists());
}

#[test]
fn custom_stub_overrides_the_built_in_one() {
    let (dir, mut args) = settings_fixture();
    let stub_path = dir.path().join("custom.stub");
    std::fs::write(&stub_path, "// DummyACFGroup for dummy_slug\naddDummyFields\n")
        .unwrap();
    args.stub = Some(stub_path);

    let prompter = one_field_prompter(true);
    run_create(&args, &prompter).unwrap();

    let contents =
        std::fs::read_to_string(dir.path().join("theme/app/ACFGroups/Product.php"))
            .unwrap();
    assert!(contents.starts_with("// ProductACFGroup for product\n"));
    assert!(contents.contains("->addText("));
}
