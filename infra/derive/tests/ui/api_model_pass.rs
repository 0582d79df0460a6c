use sentio_derive::api_model;

#[api_model(deny_unknown_fields = false)]
pub struct Request {
    pub text: String,
    pub max_chars: usize,
}

#[api_model]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Positive,
    Negative,
}

fn main() {
    let req: Request =
        serde_json::from_str(r#"{"text":"hi","maxChars":280,"extra":true}"#).unwrap();
    assert_eq!(req.text, "hi");
    assert_eq!(req.max_chars, 280);

    assert_eq!(serde_json::to_string(&Label::Positive).unwrap(), "\"positive\"");
    let label: Label = serde_json::from_str("\"negative\"").unwrap();
    assert_eq!(label, Label::Negative);
}
