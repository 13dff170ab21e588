use crate::form::{AnswerForm, Field};

pub const REQUIRED_MESSAGE: &str = "Campo obrigatório";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Result of checking an [`AnswerForm`].
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Validation {
    errors: Vec<FieldError>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn into_result(self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

pub fn validate(form: &AnswerForm) -> Validation {
    let mut errors = Vec::new();
    for field in Field::ALL {
        if field.is_required() && form.get(field).trim().is_empty() {
            errors.push(FieldError {
                field,
                message: REQUIRED_MESSAGE.into(),
            });
        }
    }
    Validation { errors }
}

/// Error to show next to a control: only once the user has visited it.
pub fn visible_error(form: &AnswerForm, validation: &Validation, field: Field) -> Option<String> {
    if !form.is_touched(field) {
        return None;
    }
    validation.error_for(field).map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_answer_is_required() {
        let v = validate(&AnswerForm::new());
        assert!(!v.is_valid());
        assert_eq!(v.error_for(Field::Answer), Some("Campo obrigatório"));
        assert_eq!(v.errors().len(), 1);
    }

    #[test]
    fn whitespace_answer_is_rejected() {
        let mut form = AnswerForm::new();
        form.set(Field::Answer, " \n\t ");
        assert!(!validate(&form).is_valid());
    }

    #[test]
    fn optional_fields_accept_anything() {
        let mut form = AnswerForm::new();
        form.set(Field::Email, "not an email");
        form.set(Field::Age, "idade?");
        form.set(Field::Answer, "Gosto");
        assert!(validate(&form).is_valid());
        assert_eq!(validate(&form).into_result(), Ok(()));
    }

    #[test]
    fn error_hidden_until_touched() {
        let mut form = AnswerForm::new();
        let v = validate(&form);
        assert_eq!(visible_error(&form, &v, Field::Answer), None);

        form.touch(Field::Answer);
        assert_eq!(
            visible_error(&form, &v, Field::Answer).as_deref(),
            Some(REQUIRED_MESSAGE)
        );
        assert_eq!(visible_error(&form, &v, Field::Name), None);
    }
}
