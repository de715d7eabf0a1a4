use crate::error::Result;
use crate::group::{FieldSpec, FieldType, GroupSpec, Location, LocationWhen, Operator};
use crate::prompt::Prompter;

/// Final state of a wizard run.
#[derive(Debug)]
pub enum WizardOutcome {
    /// The user confirmed; the collected group is ready for rendering.
    Accepted(GroupSpec),
    /// The user declined at the final gate. Nothing was rendered or written.
    Aborted,
}

/// Drives the question sequence collecting a [`GroupSpec`].
///
/// The prompter is injected so the whole run can be scripted in tests.
/// A run is one-shot: slug, location, fields, recap, confirm.
pub struct WizardController<'a> {
    prompter: &'a dyn Prompter,
}

impl<'a> WizardController<'a> {
    pub fn new(prompter: &'a dyn Prompter) -> Self {
        Self { prompter }
    }

    pub fn run(&self) -> Result<WizardOutcome> {
        self.prompter.show_title("Welcome to the ACF Field Group Generator");

        self.prompter.show_section("1. Field Group information");
        let slug = self.prompter.ask_text("Enter the name of the field group to create")?;

        self.prompter.show_section("2. Field Group location");
        let location = self.collect_location()?;

        self.prompter.show_section("3. Add fields to the group");
        let fields = self.collect_fields()?;

        let group = GroupSpec { slug, location, fields };

        self.prompter.show_section("4. Recap");
        self.prompter.show_recap(&group);

        if self.prompter.ask_confirm("Continue with this action?", true)? {
            Ok(WizardOutcome::Accepted(group))
        } else {
            Ok(WizardOutcome::Aborted)
        }
    }

    fn collect_location(&self) -> Result<Location> {
        self.prompter.show_note("Example: post_type == product");

        let when_labels: Vec<&str> =
            LocationWhen::ALL.iter().map(LocationWhen::as_str).collect();
        let when =
            LocationWhen::ALL[self.prompter.ask_choice("Show this field group if", &when_labels)?];

        // The remaining prompts interpolate the answers given so far.
        let operator_labels: Vec<&str> = Operator::ALL.iter().map(Operator::as_str).collect();
        let operator = Operator::ALL[self.prompter.ask_choice(
            &format!("{} is equal to/not equal to", when),
            &operator_labels,
        )?];

        let value = self
            .prompter
            .ask_text(&format!("Show this group when {} {}", when, operator))?;

        Ok(Location { when, operator, value })
    }

    /// Collects fields until the user declines to add another one. Driven
    /// entirely by user input, so this must stay an iterating loop rather
    /// than recursion.
    fn collect_fields(&self) -> Result<Vec<FieldSpec>> {
        let type_labels: Vec<&str> = FieldType::ALL.iter().map(FieldType::label).collect();
        let mut fields = Vec::new();

        loop {
            let r#type =
                FieldType::ALL[self.prompter.ask_choice("Add a field", &type_labels)?];
            let slug = self.prompter.ask_text("Enter the slug of the field")?;
            let label = self.prompter.ask_text("Enter the label of the field")?;
            let required = self.prompter.ask_confirm("Is the field required?", false)?;

            fields.push(FieldSpec { r#type, slug, label, required });

            if !self.prompter.ask_confirm("Do you want to add another field?", true)? {
                return Ok(fields);
            }
        }
    }
}
