// Property-based tests for grid addressing and tap handling
// Random bounds and taps check the invariants the picker promises

use chrono::{Datelike, Days, NaiveDate};
use date_range_picker::models::bound::DateBound;
use date_range_picker::services::grid::GridIndexMapper;
use date_range_picker::services::selection::SelectionStateMachine;
use date_range_picker::{GridAddress, PickerEvent};
use proptest::prelude::*;
use std::collections::HashSet;

fn day_strategy() -> impl Strategy<Value = NaiveDate> {
    // 2000-01-01 plus up to ~40 years
    (0u64..14_600).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap()
    })
}

fn bound_strategy() -> impl Strategy<Value = DateBound> {
    (day_strategy(), 0u64..800).prop_map(|(minimum, span)| DateBound {
        minimum,
        maximum: minimum.checked_add_days(Days::new(span)).unwrap(),
    })
}

proptest! {
    /// Property: every bound yields at least one section and section 0
    /// starts on the first of the minimum date's month
    #[test]
    fn prop_sections_start_at_minimum_month(bound in bound_strategy()) {
        let mapper = GridIndexMapper::gregorian(bound);
        prop_assert!(mapper.section_count() >= 1);

        let first = mapper.first_date_of_section(0);
        prop_assert_eq!(first.day(), 1);
        prop_assert_eq!(first.month(), bound.minimum.month());
        prop_assert_eq!(first.year(), bound.minimum.year());
    }

    /// Property: date cells of a section map one-to-one onto the days of
    /// its month and invert through address_of
    #[test]
    fn prop_resolve_date_is_bijective(bound in bound_strategy(), pick in 0usize..64) {
        let mapper = GridIndexMapper::gregorian(bound);
        let section = pick % mapper.section_count();
        let first_day_item = mapper.first_day_item(section);

        prop_assert_eq!(
            mapper.item_count(section),
            7 + mapper.blank_count(section) + mapper.days_in_section(section)
        );

        let mut seen = HashSet::new();
        for item in first_day_item..mapper.item_count(section) {
            let address = GridAddress::new(section, item);
            let day = mapper.resolve_date(address).unwrap();
            prop_assert_eq!(day.day() as usize, item - first_day_item + 1);
            prop_assert_eq!(mapper.address_of(day), Some(address));
            prop_assert!(seen.insert(day));
        }
        prop_assert_eq!(seen.len(), mapper.days_in_section(section));

        for item in 0..first_day_item {
            prop_assert_eq!(mapper.resolve_date(GridAddress::new(section, item)), None);
        }
    }

    /// Property: day 1 of every month sits under its own weekday column
    #[test]
    fn prop_first_day_aligns_with_weekday(bound in bound_strategy(), pick in 0usize..64) {
        let mapper = GridIndexMapper::gregorian(bound);
        let section = pick % mapper.section_count();
        let address = GridAddress::new(section, mapper.first_day_item(section));
        let first = mapper.resolve_date(address).unwrap();
        prop_assert_eq!(
            address.column(),
            first.weekday().num_days_from_sunday() as usize
        );
    }

    /// Property: taps outside the bound never change the selection
    #[test]
    fn prop_out_of_bound_taps_are_noops(
        bound in bound_strategy(),
        offset in 1u64..40,
        before in any::<bool>(),
    ) {
        let mapper = GridIndexMapper::gregorian(bound);
        let mut machine = SelectionStateMachine::new(mapper, HashSet::new(), 30);
        let day = if before {
            bound.minimum.checked_sub_days(Days::new(offset)).unwrap()
        } else {
            bound.maximum.checked_add_days(Days::new(offset)).unwrap()
        };

        if let Some(address) = machine.mapper().address_of(day) {
            let selection = *machine.selection();
            prop_assert!(machine.handle_tap(address).is_empty());
            prop_assert_eq!(*machine.selection(), selection);
        }
    }

    /// Property: a first tap on a valid day selects it as start only
    #[test]
    fn prop_first_tap_selects_start(bound in bound_strategy(), offset in 0u64..800) {
        let mapper = GridIndexMapper::gregorian(bound);
        let mut machine = SelectionStateMachine::new(mapper, HashSet::new(), 30);
        let span = (bound.maximum - bound.minimum).num_days() as u64;
        let day = bound.minimum.checked_add_days(Days::new(offset % (span + 1))).unwrap();
        let address = machine.mapper().address_of(day).unwrap();

        let events = machine.handle_tap(address);
        prop_assert_eq!(events, vec![PickerEvent::StartSelected(day), PickerEvent::Refresh]);
        prop_assert_eq!(machine.selection().end, None);
    }

    /// Property: over-long ranges always end exactly max_range - 1 days
    /// after the start, and the scroll hint points at that day's cell
    #[test]
    fn prop_clamp_is_exact(
        start in day_strategy(),
        max_range in 1u32..60,
        extra in 0u64..200,
    ) {
        let tapped = start
            .checked_add_days(Days::new(u64::from(max_range) + extra))
            .unwrap();
        let bound = DateBound { minimum: start, maximum: tapped };
        let mapper = GridIndexMapper::gregorian(bound);
        let mut machine = SelectionStateMachine::new(mapper, HashSet::new(), max_range);

        let start_address = machine.mapper().address_of(start).unwrap();
        let tapped_address = machine.mapper().address_of(tapped).unwrap();
        machine.handle_tap(start_address);
        let events = machine.handle_tap(tapped_address);

        let expected_end = start
            .checked_add_days(Days::new(u64::from(max_range) - 1))
            .unwrap();
        let expected_address = machine.mapper().address_of(expected_end).unwrap();
        prop_assert_eq!(machine.selection().end, Some(expected_end));
        prop_assert_eq!(
            events,
            vec![
                PickerEvent::EndSelected(expected_end),
                PickerEvent::ScrollToAddress(expected_address),
                PickerEvent::Refresh,
            ]
        );
    }
}
