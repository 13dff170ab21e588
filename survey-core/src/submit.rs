use crate::error::SubmitError;
use crate::form::AnswerForm;
use crate::notify::Toast;
use crate::payload::CommentPayload;
use crate::route::SurveyRoute;
use crate::validation::{validate, FieldError, Validation};
use thiserror::Error;

/// Remote side of the comment mutation.
///
/// Implementations make exactly one attempt per call: no retries, no backoff.
/// The UI talks HTTP; tests substitute an in-memory fake.
#[allow(async_fn_in_trait)]
pub trait CommentSubmitter {
    async fn submit_comment(&self, payload: &CommentPayload) -> Result<(), SubmitError>;
}

/// What the submit button shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitControl {
    /// Disabled: the answer is missing.
    IdleInvalid,
    IdleValid,
    /// Disabled with a loading indicator while the mutation is in flight.
    Pending,
}

impl SubmitControl {
    pub fn derive(validation: &Validation, in_flight: bool) -> Self {
        if in_flight {
            SubmitControl::Pending
        } else if validation.is_valid() {
            SubmitControl::IdleValid
        } else {
            SubmitControl::IdleInvalid
        }
    }

    pub fn is_enabled(self) -> bool {
        self == SubmitControl::IdleValid
    }

    pub fn is_loading(self) -> bool {
        self == SubmitControl::Pending
    }
}

/// Single-flight latch. A submit that arrives while another one is still
/// pending is refused instead of sending a second comment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmitGuard {
    in_flight: bool,
}

impl SubmitGuard {
    /// Returns `false` when a submission is already pending.
    #[must_use]
    pub fn begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }
}

/// Validate and compose. Nothing is sent for an invalid form.
pub fn prepare(form: &AnswerForm, route: &SurveyRoute) -> Result<CommentPayload, Vec<FieldError>> {
    validate(form).into_result()?;
    Ok(CommentPayload::compose(form, route))
}

/// Apply the outcome of the remote call to the form.
///
/// Success clears all six fields. Failure leaves them as they were so the
/// user can resend without retyping.
pub fn settle(form: &mut AnswerForm, result: Result<(), SubmitError>) -> Toast {
    match result {
        Ok(()) => {
            form.reset();
            Toast::submitted()
        }
        Err(e) => {
            log::warn!("comment submission failed: {e:?}");
            Toast::failed(&e)
        }
    }
}

/// Why a submit did not start.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitRefused {
    #[error("a submission is already pending")]
    InFlight,
    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(Vec<FieldError>),
}

/// Synchronous half of a submit, run on the click.
///
/// Refuses while another submission is pending. An invalid form reveals every
/// field error and sends nothing. Otherwise the guard is taken and the
/// payload returned; the caller must hand the outcome to [`finish_submit`].
pub fn begin_submit(
    form: &mut AnswerForm,
    guard: &mut SubmitGuard,
    route: &SurveyRoute,
) -> Result<CommentPayload, SubmitRefused> {
    if guard.in_flight() {
        return Err(SubmitRefused::InFlight);
    }
    let payload = match prepare(form, route) {
        Ok(payload) => payload,
        Err(errors) => {
            form.touch_all();
            return Err(SubmitRefused::Invalid(errors));
        }
    };
    if !guard.begin() {
        return Err(SubmitRefused::InFlight);
    }
    log::info!(
        "submitting comment for point={} question={}",
        payload.divergence_point_id,
        payload.question_id
    );
    Ok(payload)
}

/// Settles the form and releases the guard, whatever the outcome.
pub fn finish_submit(
    form: &mut AnswerForm,
    guard: &mut SubmitGuard,
    result: Result<(), SubmitError>,
) -> Toast {
    let toast = settle(form, result);
    guard.finish();
    toast
}

/// Full submit flow: guard, validate, send once, settle.
pub async fn submit<C>(
    client: &C,
    form: &mut AnswerForm,
    guard: &mut SubmitGuard,
    route: &SurveyRoute,
) -> Result<Toast, SubmitRefused>
where
    C: CommentSubmitter,
{
    let payload = begin_submit(form, guard, route)?;
    let result = client.submit_comment(&payload).await;
    Ok(finish_submit(form, guard, result))
}
