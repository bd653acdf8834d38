use fp_derive::fp_error;
use std::borrow::Cow;

#[fp_error]
pub enum ParseError {
    #[error("Bad number{}: {source}", format_context(.context))]
    Number { source: std::num::ParseFloatError, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<f64, ParseError> {
    raw.trim().parse::<f64>().context(format!("reading '{raw}'"))
}

fn main() {
    assert_eq!(parse(" 2.5 ").ok(), Some(2.5));

    let err = parse("abc").unwrap_err();
    assert!(matches!(err, ParseError::Number { .. }));
    assert!(err.to_string().starts_with("Bad number (reading 'abc'): "));

    let err: Result<(), ParseError> = Err("boom".into());
    let err = err.context("outer").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (outer): boom");

    let from: ParseError = "x".parse::<f64>().unwrap_err().into();
    assert_eq!(from.to_string(), "Bad number: invalid float literal");
}
