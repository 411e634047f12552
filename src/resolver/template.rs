// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Positional placeholder substitution for registry message templates.

/// Outcome of rendering one template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub text: String,
    /// Placeholder tokens (`%1` and up) found in the template
    pub placeholders: usize,
    /// Tokens left verbatim because no argument was supplied for them
    pub unresolved: usize,
}

/// Replaces `%n` with `args[n - 1]` in a single left-to-right pass.
///
/// A token is `%` followed by every digit after it, so `%10` is the tenth
/// argument. Tokens without an argument stay in the output verbatim; `%0`
/// and a bare `%` are plain text. Inserted arguments are not rescanned.
pub fn render(template: &str, args: &[String]) -> RenderedMessage {
    let bytes = template.as_bytes();
    let mut text = String::with_capacity(template.len());
    let mut placeholders = 0;
    let mut unresolved = 0;
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }

        let digits_start = i + 1;
        let mut end = digits_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end == digits_start {
            i += 1;
            continue;
        }

        let position = template[digits_start..end].parse::<usize>().ok().filter(|n| *n >= 1);
        text.push_str(&template[literal_start..i]);
        match position {
            Some(n) => {
                placeholders += 1;
                match args.get(n - 1) {
                    Some(arg) => text.push_str(arg),
                    None => {
                        unresolved += 1;
                        text.push_str(&template[i..end]);
                    }
                }
            }
            None => text.push_str(&template[i..end]),
        }
        literal_start = end;
        i = end;
    }
    text.push_str(&template[literal_start..]);

    RenderedMessage {
        text,
        placeholders,
        unresolved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_render() {
        struct TestCase {
            name: &'static str,
            template: &'static str,
            args: Vec<String>,
            expected: &'static str,
            placeholders: usize,
            unresolved: usize,
        }

        let test_cases = vec![
            TestCase {
                name: "single placeholder",
                template: "The system board %1 temperature is less than the lower warning threshold.",
                args: args(&["Inlet"]),
                expected: "The system board Inlet temperature is less than the lower warning threshold.",
                placeholders: 1,
                unresolved: 0,
            },
            TestCase {
                name: "no placeholders",
                template: "Successfully Completed Request",
                args: vec![],
                expected: "Successfully Completed Request",
                placeholders: 0,
                unresolved: 0,
            },
            TestCase {
                name: "missing argument stays verbatim",
                template: "The system board %1 temperature is low.",
                args: vec![],
                expected: "The system board %1 temperature is low.",
                placeholders: 1,
                unresolved: 1,
            },
            TestCase {
                name: "partial substitution",
                template: "The value %1 for the property %2 is invalid.",
                args: args(&["abc"]),
                expected: "The value abc for the property %2 is invalid.",
                placeholders: 2,
                unresolved: 1,
            },
            TestCase {
                name: "out of order and repeated",
                template: "%2 then %1 then %2",
                args: args(&["a", "b"]),
                expected: "b then a then b",
                placeholders: 3,
                unresolved: 0,
            },
            TestCase {
                name: "two digit placeholder",
                template: "%1 %10 %11",
                args: args(&["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]),
                expected: "a j %11",
                placeholders: 3,
                unresolved: 1,
            },
            TestCase {
                name: "extra arguments ignored",
                template: "Fan %1 failed.",
                args: args(&["1A", "unused"]),
                expected: "Fan 1A failed.",
                placeholders: 1,
                unresolved: 0,
            },
            TestCase {
                name: "percent literals",
                template: "Utilization at 100% (%0) for %1%",
                args: args(&["CPU"]),
                expected: "Utilization at 100% (%0) for CPU%",
                placeholders: 1,
                unresolved: 0,
            },
            TestCase {
                name: "arguments are not rescanned",
                template: "%1 and %2",
                args: args(&["%2", "x"]),
                expected: "%2 and x",
                placeholders: 2,
                unresolved: 0,
            },
            TestCase {
                name: "multibyte text around placeholders",
                template: "Température %1 °C",
                args: args(&["42"]),
                expected: "Température 42 °C",
                placeholders: 1,
                unresolved: 0,
            },
        ];

        for case in test_cases {
            let rendered = render(case.template, &case.args);
            assert_eq!(rendered.text, case.expected, "Test case '{}'", case.name);
            assert_eq!(rendered.placeholders, case.placeholders, "Test case '{}' placeholders", case.name);
            assert_eq!(rendered.unresolved, case.unresolved, "Test case '{}' unresolved", case.name);
        }
    }

    #[test]
    fn test_oversized_position_is_plain_text() {
        let rendered = render("%99999999999999999999999", &args(&["a"]));
        assert_eq!(rendered.text, "%99999999999999999999999");
        assert_eq!(rendered.placeholders, 0);
    }
}
