//! Normalizes and prints channel service output.

use crate::models::ServiceResult;

/// Strips every literal CR-LF pair from peer output.
///
/// The peer binary may interleave Windows-style line endings; the original
/// tooling stripped the pairs outright rather than converting them, and
/// downstream scripts depend on that exact shape.
pub fn normalize_output(output: &str) -> String {
    output.replace("\r\n", "")
}

/// Prints the service output if there is any. An absent output field is a
/// valid empty result and prints nothing.
pub fn print_result(result: &ServiceResult) {
    if let Some(output) = &result.output {
        println!("{}", normalize_output(output));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_crlf_pairs() {
        // Stripped, not converted: both pairs vanish entirely.
        assert_eq!(normalize_output("a\r\nb\r\n"), "ab");
    }

    #[test]
    fn test_normalize_leaves_bare_linefeeds() {
        assert_eq!(normalize_output("a\nb"), "a\nb");
    }

    #[test]
    fn test_normalize_leaves_bare_carriage_returns() {
        assert_eq!(normalize_output("a\rb"), "a\rb");
    }

    #[test]
    fn test_print_absent_output_is_not_an_error() {
        // Just exercises the no-output path; nothing should panic.
        print_result(&ServiceResult::default());
    }
}
