use crate::{Catalog, CatalogError, Color, Kind, OracleError, Token};

impl Token {
    /// Two-character wire form: color letter then kind letter, e.g. `RK` for 帥.
    pub fn code(&self) -> String {
        let mut code = String::with_capacity(2);
        code.push(self.color.code());
        code.push(self.kind.code());
        code
    }

    pub fn from_code(code: &str, catalog: &Catalog) -> Result<Token, OracleError> {
        let (kind, color) = parse_code(code)?;
        Ok(catalog.token(kind, color)?)
    }
}

pub fn parse_code(code: &str) -> Result<(Kind, Color), OracleError> {
    let malformed = || OracleError::MalformedToken(code.to_string());
    let mut chars = code.trim().chars();
    let (Some(color), Some(kind), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(malformed());
    };
    let color = Color::from_code(color).ok_or_else(malformed)?;
    let kind = Kind::from_code(kind).ok_or_else(malformed)?;
    Ok((kind, color))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    pub tokens: Vec<Token>,
    pub dropped: Vec<String>,
}

/// Decodes a list of wire codes. Malformed entries are dropped and reported
/// in `dropped`; a well-formed code the catalog cannot resolve is an error.
pub fn decode_codes<'a, I>(codes: I, catalog: &Catalog) -> Result<Decoded, CatalogError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut decoded = Decoded::default();
    for code in codes {
        match parse_code(code) {
            Ok((kind, color)) => decoded.tokens.push(catalog.token(kind, color)?),
            Err(_) => decoded.dropped.push(code.to_string()),
        }
    }
    Ok(decoded)
}

pub fn encode_codes(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::code)
        .collect::<Vec<_>>()
        .join(",")
}
