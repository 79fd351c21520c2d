//! Custom assertion macros

/// Assert the pseudos of a user list, in order
#[macro_export]
macro_rules! assert_pseudos {
    ($users:expr, [$($pseudo:expr),* $(,)?]) => {
        let actual: Vec<&str> = $users.iter().map(|u| u.pseudo.as_str()).collect();
        let expected: Vec<&str> = vec![$($pseudo),*];
        pretty_assertions::assert_eq!(actual, expected);
    };
}
