//! The "New Print Campaign" modal as a state machine.
//!
//! The workflow starts closed. Opening it starts an empty draft, choosing a prefix generates a
//! plan name, and the draft leaves the modal through one of three exits:
//!
//! - [`submit`](NewCampaignWorkflow::submit) validates strictly and emits a [`NewCampaign`]
//! - [`save_draft`](NewCampaignWorkflow::save_draft) skips validation and emits a
//!   [`DraftCampaign`]
//! - [`close`](NewCampaignWorkflow::close) discards the draft
//!
//! Every exit resets the draft. The workflow itself performs no I/O, the host reacts to the
//! returned [`Outcome`].

use tracing::debug;

use crate::Prefix;

mod suffix;
mod validation;

pub use suffix::{
    SUFFIX_MAX, SUFFIX_MIN, SeededSuffix, SequenceSuffix, SuffixSource, ThreadRngSuffix, plan_name,
};
pub use validation::{FormField, ValidationError, ValidationErrors};

/// A validated draft, ready to become a campaign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCampaign {
    pub prefix: Prefix,
    pub plan_name: String,
}

/// Whatever the form held when "Save as Draft" was pressed. Nothing is guaranteed to be set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftCampaign {
    pub prefix: Option<Prefix>,
    pub plan_name: String,
}

/// Result of driving the workflow, used for communicating with the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The event didn't apply in the current state
    Ignored,
    Opened,
    /// The draft changed and the modal is still open
    Updated,
    /// Submission failed validation, the modal stays open
    Rejected(ValidationErrors),
    Submitted(NewCampaign),
    Drafted(DraftCampaign),
    Closed,
}

impl Outcome {
    /// Whether this outcome closed the modal.
    pub fn is_exit(&self) -> bool {
        matches!(
            self,
            Outcome::Submitted(_) | Outcome::Drafted(_) | Outcome::Closed
        )
    }
}

#[derive(Debug)]
pub struct NewCampaignWorkflow {
    open: bool,
    prefix: Option<Prefix>,
    plan_name: String,
    errors: ValidationErrors,
    suffixes: Box<dyn SuffixSource>,
}

impl NewCampaignWorkflow {
    pub fn new(suffixes: Box<dyn SuffixSource>) -> Self {
        Self {
            open: false,
            prefix: None,
            plan_name: String::new(),
            errors: ValidationErrors::default(),
            suffixes,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn prefix(&self) -> Option<Prefix> {
        self.prefix
    }

    pub fn plan_name(&self) -> &str {
        &self.plan_name
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// The plan name can only be edited once a prefix has been chosen.
    pub fn plan_name_enabled(&self) -> bool {
        self.prefix.is_some()
    }

    /// Whether a submission would currently pass validation.
    pub fn is_complete(&self) -> bool {
        self.prefix.is_some() && !self.plan_name.trim().is_empty()
    }

    /// Open the modal with an empty draft. Does nothing if it is already open.
    pub fn open(&mut self) -> Outcome {
        if self.open {
            debug!("New campaign workflow is already open");
            return Outcome::Ignored;
        }

        self.reset();
        self.open = true;
        debug!("Opened new campaign workflow");

        Outcome::Opened
    }

    /// Choose or clear the plan name prefix.
    ///
    /// Changing to a new prefix generates a fresh plan name and clears any errors. Clearing
    /// the prefix clears the plan name. Re-selecting the current prefix changes nothing.
    pub fn select_prefix(&mut self, prefix: Option<Prefix>) -> Outcome {
        if !self.open || prefix == self.prefix {
            return Outcome::Ignored;
        }

        self.prefix = prefix;

        match prefix {
            Some(prefix) => {
                self.plan_name = plan_name(prefix, self.suffixes.next_suffix());
                self.errors.remove(FormField::Prefix);
                self.errors.remove(FormField::PlanName);
                debug!("Generated plan name {}", self.plan_name);
            }
            None => self.plan_name.clear(),
        }

        Outcome::Updated
    }

    /// Replace the plan name with user input. Ignored while no prefix is selected.
    pub fn edit_plan_name(&mut self, plan_name: impl Into<String>) -> Outcome {
        if !self.open || !self.plan_name_enabled() {
            return Outcome::Ignored;
        }

        self.plan_name = plan_name.into();

        Outcome::Updated
    }

    /// Run strict validation, replacing the current errors with the result.
    pub fn validate(&mut self) -> Result<NewCampaign, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let plan_name = self.plan_name.trim();

        // The plan name field is disabled until a prefix exists, so only the prefix is
        // reported in that case.
        if self.prefix.is_none() {
            errors.insert(FormField::Prefix, ValidationError::MissingPrefix);
        } else if plan_name.is_empty() {
            errors.insert(FormField::PlanName, ValidationError::MissingPlanName);
        }

        self.errors = errors.clone();

        match self.prefix {
            Some(prefix) if errors.is_empty() => Ok(NewCampaign {
                prefix,
                plan_name: plan_name.into(),
            }),
            _ => Err(errors),
        }
    }

    pub fn submit(&mut self) -> Outcome {
        if !self.open {
            return Outcome::Ignored;
        }

        match self.validate() {
            Ok(campaign) => {
                debug!("Submitted new campaign {}", campaign.plan_name);
                self.finish();
                Outcome::Submitted(campaign)
            }
            Err(errors) => {
                debug!("Rejected new campaign: {errors}");
                Outcome::Rejected(errors)
            }
        }
    }

    /// Emit the draft as-is, without validation, and close.
    pub fn save_draft(&mut self) -> Outcome {
        if !self.open {
            return Outcome::Ignored;
        }

        let draft = DraftCampaign {
            prefix: self.prefix,
            plan_name: self.plan_name.trim().into(),
        };
        debug!("Saved draft {draft:?}");
        self.finish();

        Outcome::Drafted(draft)
    }

    /// Discard the draft and close. Used for cancel, escape and clicks outside the modal.
    pub fn close(&mut self) -> Outcome {
        if !self.open {
            return Outcome::Ignored;
        }

        debug!("Closed new campaign workflow without saving");
        self.finish();

        Outcome::Closed
    }

    fn finish(&mut self) {
        self.reset();
        self.open = false;
    }

    /// Reset the draft state
    fn reset(&mut self) {
        self.prefix = None;
        self.plan_name.clear();
        self.errors.clear();
    }
}
