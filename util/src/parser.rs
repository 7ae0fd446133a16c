use combine::{char::*, *};

pub fn parse_trimmed<'str_in, P: combine::Parser<Input = &'str_in str>>(
    str_in: &'str_in str,
    parser: P,
) -> Result<P::Output, combine::error::StringStreamError> {
    (spaces(), parser, spaces(), eof())
        .parse(str_in)
        .map(|tploutconsumed| tploutconsumed.0.1)
}

/// Parses tokens separated by whitespace, e.g. "2 15 24" or "EO EO H10".
pub fn parse_whitespace_separated<'str_in, C, P>(
    str_in: &'str_in str,
    parser: P,
) -> Result<C, combine::error::StringStreamError>
    where
        C: std::iter::Extend<P::Output>+Default,
        P: combine::Parser<Input = &'str_in str>,
{
    // separators need at least one whitespace, trailing whitespace would be taken for a separator
    parse_trimmed(str_in.trim(), sep_by::<C,_,_>(parser, skip_many1(space())))
}

pub fn number_parser<I: Stream<Item=char>>() -> impl Parser<Input = I, Output = String>
    where I::Error: ParseError<I::Item, I::Range, I::Position>, // Necessary due to rust-lang/rust#24159
{
    many1::<String, _>(digit())
}

#[test]
fn test_parse_whitespace_separated() {
    assert_eq!(
        parse_whitespace_separated::<Vec<_>, _>("  2 15\t24  ", number_parser()).ok(),
        Some(vec!["2".to_string(), "15".to_string(), "24".to_string()]),
    );
    assert_eq!(
        parse_whitespace_separated::<Vec<_>, _>("", number_parser()).ok(),
        Some(Vec::<String>::new()),
    );
    assert!(parse_whitespace_separated::<Vec<_>, _>("2 x 3", number_parser()).is_err());
}

#[test]
fn test_parse_whitespace_separated_needs_separator() {
    assert!(parse_whitespace_separated::<Vec<_>, _>("2 15", (digit(), digit())).is_err());
    assert_eq!(
        parse_whitespace_separated::<Vec<_>, _>("12 15", (digit(), digit())).ok(),
        Some(vec![('1', '2'), ('1', '5')]),
    );
}
