// roster_tui — Keyboard-navigable meeting roster for the terminal
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use super::cursor::FocusCursor;
use super::registry::{ListProvider, ListRegistry, NavError};
use super::types::{ActivationRequest, FocusSlot, ListId, NavKey, NavState, NavigationEvent};
use std::num::NonZeroUsize;

/// Receives activation requests. What activation means is up to the implementor.
pub trait ActivationDispatcher {
    fn dispatch(&mut self, request: ActivationRequest);
}

/// Collect requests now, act on them once the engine has returned.
impl ActivationDispatcher for Vec<ActivationRequest> {
    fn dispatch(&mut self, request: ActivationRequest) {
        self.push(request);
    }
}

/// Roving-tabindex navigation over a set of registered lists.
///
/// Per event:
/// 1. resolve the source list and read its live item count;
/// 2. on `Escape`, or when the cursor does not point at an existing item,
///    reset the cursor and focus the container;
/// 3. apply the key: `Down`/`Up` step with wrap-around, `Right`/`Enter`
///    activate the focused item, everything else stops after step 2.
#[derive(Debug, Clone)]
pub struct RovingNavigator {
    registry: ListRegistry,
}

impl RovingNavigator {
    /// Fresh engine: every cursor starts on its container.
    pub fn new(lists: impl IntoIterator<Item = ListId>) -> Self {
        Self { registry: ListRegistry::new(lists) }
    }

    pub fn registry(&self) -> &ListRegistry {
        &self.registry
    }

    /// State of `list` as of the last processed event.
    pub fn state(&self, list: ListId) -> Option<NavState> {
        self.registry.cursor(list).map(FocusCursor::state)
    }

    pub fn handle<P, D>(
        &mut self,
        lists: &mut P,
        dispatcher: &mut D,
        event: NavigationEvent,
    ) -> Result<NavState, NavError>
    where
        P: ListProvider + ?Sized,
        D: ActivationDispatcher + ?Sized,
    {
        let resolved = self.registry.resolve(lists, event.source)?;
        let count = resolved.descriptor.item_count;
        let cursor = resolved.cursor;
        let handle = resolved.handle;

        if event.key == NavKey::Escape || !cursor.is_valid_for(count) {
            if cursor.index().is_some() {
                tracing::debug!(
                    list = %event.source,
                    index = cursor.raw(),
                    count,
                    key = ?event.key,
                    "resetting cursor to container"
                );
            }
            cursor.reset();
            handle.focus(FocusSlot::Container);
        }

        match event.key {
            NavKey::ArrowDown | NavKey::ArrowUp => {
                if let Some(n) = NonZeroUsize::new(count) {
                    let index = if event.key == NavKey::ArrowDown {
                        cursor.advance(n)
                    } else {
                        cursor.retreat(n)
                    };
                    handle.focus(FocusSlot::Item(index));
                    tracing::debug!(list = %event.source, index, count, "focused item");
                }
            }
            key if key.is_activation() => {
                if let Some(index) = cursor.index() {
                    tracing::debug!(list = %event.source, index, "activation requested");
                    dispatcher.dispatch(ActivationRequest { list: event.source, index });
                }
            }
            _ => {}
        }

        Ok(cursor.state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::registry::ListHandle;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct FakeList {
        count: usize,
        focus_calls: Vec<FocusSlot>,
    }

    impl ListHandle for FakeList {
        fn item_count(&self) -> usize {
            self.count
        }

        fn focus(&mut self, slot: FocusSlot) {
            if let FocusSlot::Item(i) = slot {
                assert!(i < self.count, "focused item {i} of {}", self.count);
            }
            self.focus_calls.push(slot);
        }
    }

    #[derive(Default)]
    struct FakeLists {
        messages: FakeList,
        participants: FakeList,
    }

    impl FakeLists {
        fn with_counts(messages: usize, participants: usize) -> Self {
            Self {
                messages: FakeList { count: messages, ..FakeList::default() },
                participants: FakeList { count: participants, ..FakeList::default() },
            }
        }
    }

    impl ListProvider for FakeLists {
        fn resolve(&mut self, id: ListId) -> Option<&mut dyn ListHandle> {
            Some(match id {
                ListId::Messages => &mut self.messages,
                ListId::Participants => &mut self.participants,
            })
        }
    }

    fn press(
        nav: &mut RovingNavigator,
        lists: &mut FakeLists,
        key: NavKey,
        source: ListId,
    ) -> (NavState, Vec<ActivationRequest>) {
        let mut requests = Vec::new();
        let state = nav.handle(lists, &mut requests, NavigationEvent::new(key, source)).unwrap();
        (state, requests)
    }

    fn down_n(nav: &mut RovingNavigator, lists: &mut FakeLists, source: ListId, n: usize) {
        for _ in 0..n {
            press(nav, lists, NavKey::ArrowDown, source);
        }
    }

    #[test]
    fn down_down_up_scenario() {
        let mut nav = RovingNavigator::new(ListId::ALL);
        let mut lists = FakeLists::with_counts(4, 0);
        let mut seen = Vec::new();
        for key in [NavKey::ArrowDown, NavKey::ArrowDown, NavKey::ArrowUp] {
            let (state, _) = press(&mut nav, &mut lists, key, ListId::Messages);
            seen.push(nav.registry().cursor(ListId::Messages).unwrap().raw());
            assert!(matches!(state, NavState::ItemFocused(_)));
        }
        assert_eq!(seen, vec![0, 1, 0]);
        assert_eq!(nav.state(ListId::Messages), Some(NavState::ItemFocused(0)));
        assert_eq!(lists.messages.focus_calls.last(), Some(&FocusSlot::Item(0)));
    }

    #[test]
    fn down_wraps_from_last_to_first() {
        let mut nav = RovingNavigator::new(ListId::ALL);
        let mut lists = FakeLists::with_counts(3, 0);
        down_n(&mut nav, &mut lists, ListId::Messages, 3);
        assert_eq!(nav.state(ListId::Messages), Some(NavState::ItemFocused(2)));
        let (state, _) = press(&mut nav, &mut lists, NavKey::ArrowDown, ListId::Messages);
        assert_eq!(state, NavState::ItemFocused(0));
    }

    #[test]
    fn up_wraps_from_first_to_last() {
        let mut nav = RovingNavigator::new(ListId::ALL);
        let mut lists = FakeLists::with_counts(3, 0);
        down_n(&mut nav, &mut lists, ListId::Messages, 1);
        let (state, _) = press(&mut nav, &mut lists, NavKey::ArrowUp, ListId::Messages);
        assert_eq!(state, NavState::ItemFocused(2));
    }

    #[test]
    fn up_from_container_lands_on_last_item() {
        let mut nav = RovingNavigator::new(ListId::ALL);
        let mut lists = FakeLists::with_counts(0, 5);
        let (state, _) = press(&mut nav, &mut lists, NavKey::ArrowUp, ListId::Participants);
        assert_eq!(state, NavState::ItemFocused(4));
    }

    #[test]
    fn escape_returns_to_container_and_is_idempotent() {
        let mut nav = RovingNavigator::new(ListId::ALL);
        let mut lists = FakeLists::with_counts(3, 0);
        down_n(&mut nav, &mut lists, ListId::Messages, 2);

        let (first, _) = press(&mut nav, &mut lists, NavKey::Escape, ListId::Messages);
        assert_eq!(first, NavState::ContainerFocused);
        assert_eq!(nav.registry().cursor(ListId::Messages).unwrap().raw(), -1);

        let (second, requests) = press(&mut nav, &mut lists, NavKey::Escape, ListId::Messages);
        assert_eq!(second, NavState::ContainerFocused);
        assert!(requests.is_empty());
        assert_eq!(lists.messages.focus_calls.last(), Some(&FocusSlot::Container));
    }

    #[test]
    fn empty_list_never_focuses_an_item() {
        let mut nav = RovingNavigator::new(ListId::ALL);
        let mut lists = FakeLists::with_counts(0, 0);
        for key in [NavKey::ArrowDown, NavKey::ArrowUp, NavKey::Enter, NavKey::ArrowRight] {
            let (state, requests) = press(&mut nav, &mut lists, key, ListId::Messages);
            assert_eq!(state, NavState::ContainerFocused);
            assert!(requests.is_empty());
        }
        assert!(lists.messages.focus_calls.iter().all(|s| *s == FocusSlot::Container));
    }

    #[test]
    fn activation_emits_one_request_without_moving() {
        let mut nav = RovingNavigator::new(ListId::ALL);
        let mut lists = FakeLists::with_counts(0, 4);
        down_n(&mut nav, &mut lists, ListId::Participants, 3);

        for key in [NavKey::Enter, NavKey::ArrowRight] {
            let (state, requests) = press(&mut nav, &mut lists, key, ListId::Participants);
            assert_eq!(state, NavState::ItemFocused(2));
            assert_eq!(requests, vec![ActivationRequest { list: ListId::Participants, index: 2 }]);
        }
    }

    #[test]
    fn activation_from_container_is_silent() {
        let mut nav = RovingNavigator::new(ListId::ALL);
        let mut lists = FakeLists::with_counts(3, 0);
        let (state, requests) = press(&mut nav, &mut lists, NavKey::Enter, ListId::Messages);
        assert_eq!(state, NavState::ContainerFocused);
        assert!(requests.is_empty());
    }

    #[test]
    fn stale_cursor_recovers_to_container() {
        let mut nav = RovingNavigator::new(ListId::ALL);
        let mut lists = FakeLists::with_counts(0, 8);
        down_n(&mut nav, &mut lists, ListId::Participants, 6);
        assert_eq!(nav.state(ListId::Participants), Some(NavState::ItemFocused(5)));

        lists.participants.count = 3;
        let (state, requests) = press(&mut nav, &mut lists, NavKey::Enter, ListId::Participants);
        assert_eq!(state, NavState::ContainerFocused);
        assert!(requests.is_empty());
    }

    #[test]
    fn cursor_equal_to_count_is_stale() {
        let mut nav = RovingNavigator::new(ListId::ALL);
        let mut lists = FakeLists::with_counts(3, 0);
        down_n(&mut nav, &mut lists, ListId::Messages, 3);

        lists.messages.count = 2;
        let (state, requests) = press(&mut nav, &mut lists, NavKey::ArrowRight, ListId::Messages);
        assert_eq!(state, NavState::ContainerFocused);
        assert!(requests.is_empty());
    }

    #[test]
    fn stale_cursor_then_down_starts_over() {
        let mut nav = RovingNavigator::new(ListId::ALL);
        let mut lists = FakeLists::with_counts(6, 0);
        down_n(&mut nav, &mut lists, ListId::Messages, 6);
        lists.messages.count = 3;
        let (state, _) = press(&mut nav, &mut lists, NavKey::ArrowDown, ListId::Messages);
        assert_eq!(state, NavState::ItemFocused(0));
    }

    #[test]
    fn lists_do_not_share_cursor_state() {
        let mut nav = RovingNavigator::new(ListId::ALL);
        let mut lists = FakeLists::with_counts(4, 4);
        down_n(&mut nav, &mut lists, ListId::Messages, 3);

        let (state, _) = press(&mut nav, &mut lists, NavKey::ArrowDown, ListId::Participants);
        assert_eq!(state, NavState::ItemFocused(0));
        assert_eq!(nav.state(ListId::Messages), Some(NavState::ItemFocused(2)));
    }

    #[test]
    fn unknown_list_is_dropped_without_side_effects() {
        let mut nav = RovingNavigator::new([ListId::Messages]);
        let mut lists = FakeLists::with_counts(2, 2);
        let mut requests = Vec::new();
        let result = nav.handle(
            &mut lists,
            &mut requests,
            NavigationEvent::new(NavKey::ArrowDown, ListId::Participants),
        );
        assert_eq!(result, Err(NavError::ListNotFound(ListId::Participants)));
        assert!(lists.participants.focus_calls.is_empty());
        assert!(requests.is_empty());
    }

    #[test]
    fn cursor_stays_in_bounds_across_resizes() {
        let mut nav = RovingNavigator::new(ListId::ALL);
        let mut lists = FakeLists::with_counts(5, 0);
        let keys = [
            NavKey::ArrowDown,
            NavKey::ArrowUp,
            NavKey::ArrowLeft,
            NavKey::Enter,
            NavKey::ArrowDown,
            NavKey::Escape,
            NavKey::ArrowRight,
        ];
        let counts = [5, 4, 0, 2, 7, 1, 3, 0, 6];
        for (step, count) in counts.iter().cycle().take(120).enumerate() {
            lists.messages.count = *count;
            let key = keys[step % keys.len()];
            press(&mut nav, &mut lists, key, ListId::Messages);
            let raw = nav.registry().cursor(ListId::Messages).unwrap().raw();
            #[allow(clippy::cast_possible_wrap)]
            let upper = *count as isize;
            assert!(raw == -1 || (0..upper).contains(&raw), "step {step}: {raw} / {count}");
        }
    }
}
