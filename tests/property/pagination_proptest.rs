//! Property-based tests for picker pagination state

use counterparty::egui_app::SearchState;
use counterparty::shared::User;
use proptest::prelude::*;

use crate::common::users;

fn page_sizes() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1usize..12, 0..8)
}

proptest! {
    #[test]
    fn test_append_preserves_prefix_and_order(first in 1usize..15, pages in page_sizes()) {
        let mut state = SearchState::default();
        state.begin_search();
        state.replace_results(users("p1-", first));
        state.is_searching = false;

        let mut expected: Vec<User> = state.results.clone();
        for (i, size) in pages.iter().enumerate() {
            let before = state.results.clone();
            let page = state.next_page();
            prop_assert_eq!(page as usize, i + 2);

            let incoming = users(&format!("p{}-", page), *size);
            state.append_page(page, incoming.clone());
            expected.extend(incoming);

            prop_assert_eq!(&state.results[..before.len()], &before[..]);
            prop_assert_eq!(state.page, page);
        }
        prop_assert_eq!(state.results, expected);
    }

    #[test]
    fn test_end_of_list_blocks_until_new_search(loaded in 1usize..30, loading in any::<bool>()) {
        let mut state = SearchState::default();
        state.replace_results(users("u", loaded));
        prop_assert!(state.can_load_more());

        state.mark_end_of_list();
        state.is_loading_more = loading;
        prop_assert!(!state.can_load_more());

        state.begin_search();
        prop_assert_eq!(state.page, 1);
        prop_assert!(!state.end_of_list);
        prop_assert!(!state.can_load_more(), "still searching");

        state.is_searching = false;
        prop_assert!(state.can_load_more());
    }
}
