use crate::form::{AnswerForm, Field};
use crate::route::SurveyRoute;
use serde::{Deserialize, Serialize};

/// Body of the comment mutation. Per-field structure does not survive
/// composition; the server only ever sees `text`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPayload {
    pub text: String,
    pub divergence_point_id: String,
    pub question_id: String,
}

impl CommentPayload {
    pub fn compose(form: &AnswerForm, route: &SurveyRoute) -> Self {
        Self {
            text: compose_text(form),
            divergence_point_id: route.divergence_point_id.clone(),
            question_id: route.question_id.clone(),
        }
    }
}

// Gender is collected by the form but is not part of the comment text.
const OPTIONAL_LINES: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Age];

/// `Nome`, `E-mail`, `Telefone`, `Idade` (each only when filled), then `Resposta`.
pub fn compose_text(form: &AnswerForm) -> String {
    let mut lines: Vec<String> = OPTIONAL_LINES
        .iter()
        .filter(|f| !form.get(**f).is_empty())
        .map(|f| format!("{}: {}", f.label(), form.get(*f)))
        .collect();
    lines.push(format!("{}: {}", Field::Answer.label(), form.answer));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_only_filled_lines() {
        let mut form = AnswerForm::new();
        form.set(Field::Name, "Ana");
        form.set(Field::Email, "a@b.com");
        form.set(Field::Answer, "Gosto");
        assert_eq!(compose_text(&form), "Nome: Ana\nE-mail: a@b.com\nResposta: Gosto");
    }

    #[test]
    fn full_form_keeps_order_and_drops_gender() {
        let mut form = AnswerForm::new();
        form.set(Field::Answer, "Sim");
        form.set(Field::Gender, "F");
        form.set(Field::Age, "30");
        form.set(Field::Phone, "1199");
        form.set(Field::Email, "e@x.io");
        form.set(Field::Name, "Bia");
        assert_eq!(
            compose_text(&form),
            "Nome: Bia\nE-mail: e@x.io\nTelefone: 1199\nIdade: 30\nResposta: Sim"
        );
    }

    #[test]
    fn answer_only() {
        let mut form = AnswerForm::new();
        form.set(Field::Answer, "linha 1\nlinha 2");
        assert_eq!(compose_text(&form), "Resposta: linha 1\nlinha 2");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let mut form = AnswerForm::new();
        form.set(Field::Answer, "ok");
        let payload = CommentPayload::compose(&form, &SurveyRoute::new("dp", "q"));
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "text": "Resposta: ok",
                "divergencePointId": "dp",
                "questionId": "q"
            })
        );
    }
}
