use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoaderError {
    #[error("line {0}: '{1}' is not a base-2 byte value")]
    MalformedLine(usize, String),
}

pub type Result<T> = std::result::Result<T, LoaderError>;

/// Parse an LS-8 program image in its text form: one binary byte per line,
/// `#` starts a comment, blank and comment-only lines are skipped. The
/// resulting bytes are loaded into memory in order, starting at address 0.
pub fn parse(source: &str) -> Result<Vec<u8>> {
    let mut program = Vec::new();
    for (index, line) in source.lines().enumerate() {
        let token = match line.split_once('#') {
            Some((code, _comment)) => code,
            None => line,
        }
        .trim();
        if token.is_empty() {
            continue;
        }
        let byte = u8::from_str_radix(token, 2)
            .map_err(|_| LoaderError::MalformedLine(index + 1, token.to_string()))?;
        program.push(byte);
    }
    tracing::debug!("parsed {} program bytes", program.len());
    Ok(program)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_print8() {
        let source = "\
# print8.ls8: load 8 into R0 and print it

10000010 # LDI R0,8
00000000
00001000
01000111 # PRN R0
00000000
00000001 # HLT
";
        assert_eq!(
            parse(source).unwrap(),
            vec![0x82, 0x00, 0x08, 0x47, 0x00, 0x01]
        );
    }

    #[test]
    fn test_blank_and_comment_lines_skipped() {
        assert_eq!(parse("").unwrap(), vec![]);
        assert_eq!(parse("# nothing but comments\n\n   \n").unwrap(), vec![]);
    }

    #[test]
    fn test_malformed_line_reports_number() {
        let source = "00000001\nnot-binary\n";
        assert_eq!(
            parse(source).unwrap_err(),
            LoaderError::MalformedLine(2, "not-binary".to_string())
        );
    }

    #[test]
    fn test_value_wider_than_a_byte_rejected() {
        assert_eq!(
            parse("100000000").unwrap_err(),
            LoaderError::MalformedLine(1, "100000000".to_string())
        );
    }
}
