// Random arithmetic expression generator
//
// Decision: thread-local RNG, no shared state — callable from any number of
// tasks concurrently

use rand::Rng;

const OPERATORS: [char; 2] = ['+', '-'];

/// Generate a syntactically valid infix expression of approximately `length`
/// characters.
///
/// Expressions are built from single-digit operands joined by `+` and `-`,
/// always starting and ending with a digit. Output is non-deterministic;
/// `length` is honored best-effort (the result is `length` characters when
/// `length` is odd, one short when even, and a single digit when `length`
/// is 0 or 1).
pub fn generate(length: u8) -> String {
    let mut rng = rand::thread_rng();
    let mut expr = String::with_capacity(length as usize);

    expr.push(rng.gen_range(b'0'..=b'9') as char);

    while expr.len() + 2 <= length as usize {
        expr.push(OPERATORS[rng.gen_range(0..OPERATORS.len())]);
        expr.push(rng.gen_range(b'0'..=b'9') as char);
    }

    expr
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_well_formed(expr: &str) -> bool {
        let chars: Vec<char> = expr.chars().collect();
        if chars.is_empty() {
            return false;
        }
        chars.iter().enumerate().all(|(i, c)| {
            if i % 2 == 0 {
                c.is_ascii_digit()
            } else {
                OPERATORS.contains(c)
            }
        }) && chars.len() % 2 == 1
    }

    #[test]
    fn test_generates_well_formed_expressions() {
        for length in 0..=50u8 {
            let expr = generate(length);
            assert!(is_well_formed(&expr), "malformed expression: {expr:?}");
        }
    }

    #[test]
    fn test_length_is_approximate() {
        let expr = generate(10);
        // even target: best effort lands one character short
        assert_eq!(expr.len(), 9);

        let expr = generate(11);
        assert_eq!(expr.len(), 11);
    }

    #[test]
    fn test_zero_length_yields_single_digit() {
        let expr = generate(0);
        assert_eq!(expr.len(), 1);
        assert!(expr.chars().next().unwrap().is_ascii_digit());
    }

    #[test]
    fn test_concurrent_generation() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| generate(21)))
            .collect();
        for handle in handles {
            let expr = handle.join().unwrap();
            assert!(is_well_formed(&expr));
        }
    }
}
