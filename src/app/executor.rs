//! The pipeline executor.

use crate::app::InstallContext;
use crate::app::steps::Step;
use crate::domain::AppError;
use crate::ports::ProgressReporter;

/// Drive the pipeline front-to-back through the two-phase protocol.
///
/// For each step, announce first (progress update), then perform. The first
/// perform failure aborts the remainder and is surfaced unchanged; later
/// steps never run. The executor owns no state across steps.
pub fn execute(
    steps: &[Box<dyn Step>],
    ctx: &InstallContext,
    reporter: &mut dyn ProgressReporter,
) -> Result<(), AppError> {
    let total = steps.len();
    reporter.begin(total);

    for (index, step) in steps.iter().enumerate() {
        reporter.announce(index, total, step.announce());
        step.perform(ctx)?;
    }

    reporter.finish();
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::testing::{RecordingReporter, noop_context};

    struct ScriptedStep {
        label: &'static str,
        fail: bool,
        performed: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Step for ScriptedStep {
        fn announce(&self) -> &str {
            self.label
        }

        fn perform(&self, _ctx: &InstallContext) -> Result<(), AppError> {
            self.performed.borrow_mut().push(self.label);
            if self.fail {
                return Err(AppError::Process {
                    command: format!("step {}", self.label),
                    details: "scripted failure".to_string(),
                });
            }
            Ok(())
        }
    }

    fn scripted(
        specs: &[(&'static str, bool)],
    ) -> (Vec<Box<dyn Step>>, Rc<RefCell<Vec<&'static str>>>) {
        let performed = Rc::new(RefCell::new(Vec::new()));
        let steps = specs
            .iter()
            .map(|&(label, fail)| {
                Box::new(ScriptedStep { label, fail, performed: Rc::clone(&performed) })
                    as Box<dyn Step>
            })
            .collect();
        (steps, performed)
    }

    #[test]
    fn runs_every_step_in_order_on_success() {
        let (steps, performed) = scripted(&[("one", false), ("two", false), ("three", false)]);
        let ctx = noop_context();
        let mut reporter = RecordingReporter::default();

        execute(&steps, &ctx, &mut reporter).unwrap();

        assert_eq!(*performed.borrow(), vec!["one", "two", "three"]);
        assert_eq!(
            reporter.events,
            vec!["begin 3", "0/3 one", "1/3 two", "2/3 three", "finish"]
        );
    }

    #[test]
    fn stops_at_the_first_failure() {
        let (steps, performed) = scripted(&[("one", false), ("boom", true), ("three", false)]);
        let ctx = noop_context();
        let mut reporter = RecordingReporter::default();

        let err = execute(&steps, &ctx, &mut reporter).unwrap_err();

        assert!(matches!(err, AppError::Process { .. }));
        assert_eq!(*performed.borrow(), vec!["one", "boom"]);
        // The reporter never sees finish, and the third step is never announced.
        assert_eq!(reporter.events, vec!["begin 3", "0/3 one", "1/3 boom"]);
    }

    #[test]
    fn empty_pipeline_finishes_immediately() {
        let ctx = noop_context();
        let mut reporter = RecordingReporter::default();

        execute(&[], &ctx, &mut reporter).unwrap();
        assert_eq!(reporter.events, vec!["begin 0", "finish"]);
    }
}
