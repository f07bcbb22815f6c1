//! Positional insert, pop, get and slice behaviour on small fixed lists.

mod common;

use chain_list::ErrorKind;
use chain_list::LinkedList;
use chain_list::ListError;
use common::{chars, collect, init_tracing};
use test_case::test_case;

#[test_case(0, "zabc" ; "head")]
#[test_case(1, "azbc" ; "after head")]
#[test_case(2, "abzc" ; "before tail")]
#[test_case(3, "abcz" ; "at length")]
#[test_case(chain_list::END, "abcz" ; "end marker")]
fn insert_places_value(index: isize, expected: &str) {
    init_tracing();
    let mut list = chars("abc");
    list.insert('z', index).expect("index is in range");
    assert_eq!(collect(&list), expected.chars().collect::<Vec<_>>());
    assert_eq!(list.len(), 4);
}

#[test_case(4 ; "past length")]
#[test_case(10 ; "far past length")]
#[test_case(-2 ; "negative")]
#[test_case(isize::MIN ; "most negative")]
fn insert_rejects_index(index: isize) {
    let mut list = chars("abc");
    let err = list.insert('z', index).unwrap_err();
    assert_eq!(err, ListError::IndexOutOfRange { index, len: 3 });
    assert_eq!(err.kind(), ErrorKind::Index);
    assert_eq!(collect(&list), ['a', 'b', 'c']);
}

#[test_case(0, 'a', "bcd" ; "head")]
#[test_case(1, 'b', "acd" ; "middle")]
#[test_case(3, 'd', "abc" ; "tail")]
#[test_case(-1, 'd', "abc" ; "last marker")]
fn pop_removes_value(index: isize, popped: char, rest: &str) {
    init_tracing();
    let mut list = chars("abcd");
    assert_eq!(list.pop(index), Ok(Some(popped)));
    assert_eq!(collect(&list), rest.chars().collect::<Vec<_>>());
    assert_eq!(list.len(), 3);
}

#[test_case(4 ; "at length")]
#[test_case(-2 ; "negative")]
fn pop_rejects_index(index: isize) {
    let mut list = chars("abcd");
    assert_eq!(
        list.pop(index),
        Err(ListError::IndexOutOfRange { index, len: 4 })
    );
    assert_eq!(list.len(), 4);
}

#[test_case(-1 ; "last marker")]
#[test_case(0 ; "head")]
#[test_case(3 ; "past end")]
#[test_case(-5 ; "negative")]
fn pop_empty_returns_none(index: isize) {
    let mut list: LinkedList<char> = LinkedList::new();
    assert_eq!(list.pop(index), Ok(None));
    assert!(list.is_empty());
}

#[test_case(0, 'a' ; "head")]
#[test_case(4, 'e' ; "tail")]
#[test_case(-1, 'e' ; "last marker")]
fn get_reads_value(index: isize, expected: char) {
    assert_eq!(chars("abcde").get(index), Ok(&expected));
}

#[test_case(5 ; "at length")]
#[test_case(10 ; "past length")]
#[test_case(-2 ; "negative")]
fn get_rejects_index(index: isize) {
    let err = chars("abcde").get(index).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Index);
}

#[test_case(1, Some(4), Some(2), "bd" ; "stepped")]
#[test_case(0, None, None, "abcde" ; "whole list")]
#[test_case(0, Some(5), Some(5), "a" ; "single stride")]
#[test_case(2, None, None, "cde" ; "open stop")]
#[test_case(0, None, Some(3), "ad" ; "open stop stepped")]
#[test_case(4, Some(5), None, "e" ; "last element")]
#[test_case(0, Some(5), Some(-2), "ace" ; "negative step")]
#[test_case(1, None, Some(-3), "be" ; "negative step open stop")]
#[test_case(2, Some(2), Some(-1), "" ; "empty range negative step")]
fn get_range_selects(start: isize, stop: Option<isize>, step: Option<isize>, expected: &str) {
    init_tracing();
    let list = chars("abcde");
    let slice = list.get_range(start, stop, step).expect("slice is valid");
    assert_eq!(collect(&slice), expected.chars().collect::<Vec<_>>());
    assert_eq!(slice.len(), expected.len());
}

#[test_case(-1, None, None ; "negative start")]
#[test_case(6, None, None ; "start past length")]
#[test_case(0, Some(6), None ; "stop past length")]
#[test_case(0, Some(-1), None ; "negative stop")]
fn get_range_rejects_bounds(start: isize, stop: Option<isize>, step: Option<isize>) {
    let err = chars("abcde").get_range(start, stop, step).unwrap_err();
    assert!(matches!(err, ListError::IndexOutOfRange { .. }));
}

#[test_case(1, Some(2), Some(2) ; "step longer than range")]
#[test_case(3, Some(3), None ; "empty range")]
#[test_case(4, Some(2), None ; "reversed range")]
#[test_case(0, None, Some(0) ; "zero step")]
#[test_case(4, Some(1), Some(-2) ; "reversed range past negative step")]
fn get_range_rejects_step(start: isize, stop: Option<isize>, step: Option<isize>) {
    let err = chars("abcde").get_range(start, stop, step).unwrap_err();
    assert!(matches!(err, ListError::InvalidStep { .. }));
    assert_eq!(err.kind(), ErrorKind::Index);
}

#[test]
fn slice_does_not_alias_source() {
    let source = chars("abcde");
    let mut slice = source.get_range(1, Some(4), Some(2)).unwrap();

    slice.insert('x', 0).unwrap();
    *slice.get_mut(-1).unwrap() = 'y';
    slice.pop(1).unwrap();

    assert_eq!(collect(&source), ['a', 'b', 'c', 'd', 'e']);
    assert_eq!(collect(&slice), ['x', 'y']);
}

#[test]
fn contains_uses_value_equality() {
    let list: LinkedList<String> = ["alpha", "beta"].into_iter().map(String::from).collect();
    let needle = String::from("beta");
    assert!(list.contains(&needle));
    assert!(!list.contains(&String::from("gamma")));
}
