use std::collections::BTreeSet;

/// The six inputs of the survey form, in the order they are rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Age,
    Gender,
    Answer,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Age,
        Field::Gender,
        Field::Answer,
    ];

    /// Stable form-control name, also used as the DOM id.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Age => "age",
            Field::Gender => "gender",
            Field::Answer => "answer",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Nome",
            Field::Email => "E-mail",
            Field::Phone => "Telefone",
            Field::Age => "Idade",
            Field::Gender => "Gênero",
            Field::Answer => "Resposta",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Preencha o nome da pessoa",
            Field::Email => "Preencha o e-mail",
            Field::Phone => "Preencha o telefone",
            Field::Age => "Preencha a idade",
            Field::Gender => "Preencha o gênero",
            Field::Answer => "Preencha a resposta",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, Field::Answer)
    }

    /// Free-text answer gets a multi-line control; everything else is a single line.
    pub fn is_multiline(self) -> bool {
        matches!(self, Field::Answer)
    }
}

/// Values typed into the survey form plus which controls the user has visited.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnswerForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub gender: String,
    pub answer: String,
    touched: BTreeSet<Field>,
}

impl AnswerForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Age => &self.age,
            Field::Gender => &self.gender,
            Field::Answer => &self.answer,
        }
    }

    /// Replace a field's value. Editing a control counts as touching it.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Age => self.age = value,
            Field::Gender => self.gender = value,
            Field::Answer => self.answer = value,
        }
        self.touched.insert(field);
    }

    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    /// Reveal every field error at once, e.g. after a refused submit.
    pub fn touch_all(&mut self) {
        self.touched.extend(Field::ALL);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Clears every value and forgets touched state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}
