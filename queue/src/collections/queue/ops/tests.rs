use rstest::*;

use crate::collections::ops;
use crate::collections::queue::{QueueError, StringQueue};

fn contents(queue: &StringQueue) -> Vec<String> {
  queue.iter().map(str::to_string).collect()
}

#[test]
fn test_new_and_destroy() {
  let mut queue = ops::new().unwrap();
  ops::insert_tail(Some(&mut queue), Some("a")).unwrap();
  ops::insert_tail(Some(&mut queue), Some("b")).unwrap();
  ops::destroy(Some(queue));
  ops::destroy(None);
}

#[test]
fn test_insert_with_absent_queue_fails() {
  assert_eq!(
    ops::insert_head(None, Some("value")),
    Err(QueueError::InvalidArgument("queue"))
  );
  assert_eq!(
    ops::insert_tail(None, Some("value")),
    Err(QueueError::InvalidArgument("queue"))
  );
}

#[test]
fn test_insert_with_absent_value_leaves_queue_unchanged() {
  let mut queue = ops::new().unwrap();
  ops::insert_tail(Some(&mut queue), Some("kept")).unwrap();

  assert_eq!(
    ops::insert_head(Some(&mut queue), None),
    Err(QueueError::InvalidArgument("value"))
  );
  assert_eq!(
    ops::insert_tail(Some(&mut queue), None),
    Err(QueueError::InvalidArgument("value"))
  );
  assert_eq!(ops::size(Some(&queue)), 1);
  assert_eq!(contents(&queue), vec!["kept"]);
  assert!(queue.check_integrity().is_ok());
}

#[test]
fn test_remove_head_with_absent_or_empty_queue_fails() {
  let mut buffer = [0u8; 8];
  assert_eq!(ops::remove_head(None, Some(&mut buffer[..])), Err(QueueError::EmptyQueue));

  let mut queue = ops::new().unwrap();
  assert_eq!(
    ops::remove_head(Some(&mut queue), Some(&mut buffer[..])),
    Err(QueueError::EmptyQueue)
  );
  assert_eq!(ops::size(Some(&queue)), 0);
}

#[test]
fn test_remove_head_copies_into_buffer() {
  let mut queue = ops::new().unwrap();
  ops::insert_head(Some(&mut queue), Some("hello")).unwrap();
  ops::insert_tail(Some(&mut queue), Some("world")).unwrap();

  let mut buffer = [0xffu8; 4];
  assert_eq!(ops::remove_head(Some(&mut queue), Some(&mut buffer[..])), Ok(3));
  assert_eq!(&buffer, b"hel\0");
  assert_eq!(ops::remove_head(Some(&mut queue), None), Ok(0));
  assert_eq!(ops::size(Some(&queue)), 0);
}

#[rstest]
#[case(None, 0)]
#[case(Some(&["a"][..]), 1)]
#[case(Some(&["a", "b", "c"][..]), 3)]
fn test_size(#[case] values: Option<&[&str]>, #[case] expected: usize) {
  let queue = values.map(|values| {
    let mut queue = StringQueue::new();
    for value in values {
      queue.insert_tail(value).unwrap();
    }
    queue
  });
  assert_eq!(ops::size(queue.as_ref()), expected);
}

#[test]
fn test_reverse_and_sort_with_absent_queue_are_noops() {
  ops::reverse(None);
  ops::sort(None);
}

#[test]
fn test_reverse_and_sort_through_handle() {
  let mut queue = ops::new().unwrap();
  for value in ["a", "b", "c"] {
    ops::insert_head(Some(&mut queue), Some(value)).unwrap();
  }
  assert_eq!(contents(&queue), vec!["c", "b", "a"]);

  ops::reverse(Some(&mut queue));
  assert_eq!(contents(&queue), vec!["a", "b", "c"]);

  ops::insert_tail(Some(&mut queue), Some("0")).unwrap();
  ops::sort(Some(&mut queue));
  assert_eq!(contents(&queue), vec!["0", "a", "b", "c"]);
  assert_eq!(ops::size(Some(&queue)), 4);
  assert!(queue.check_integrity().is_ok());
}
