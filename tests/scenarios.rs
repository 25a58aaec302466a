use classroom_dsa::search::binary_search;
use classroom_dsa::sort::{bubble_sort, insertion_sort, selection_sort};
use classroom_dsa::{LinkedList, ListError, Stack};

fn values(list: &LinkedList<i32>) -> Vec<i32> {
    list.iter().copied().collect()
}

#[test]
fn linked_list_walkthrough() {
    let mut list = LinkedList::new();
    list.push_back(10);
    list.push_back(20);
    list.push_front(5);
    list.insert_at(1, 15).unwrap();
    assert_eq!(values(&list), vec![5, 15, 10, 20]);
    assert_eq!(list.to_string(), "[5, 15, 10, 20]");
    assert_eq!(list.find(&10), Some(2));

    assert_eq!(list.pop_front(), Ok(5));
    assert_eq!(values(&list), vec![15, 10, 20]);

    assert_eq!(list.pop_back(), Ok(20));
    assert_eq!(values(&list), vec![15, 10]);

    assert!(list.remove(&15));
    assert_eq!(values(&list), vec![10]);

    list.push_back(25);
    assert_eq!(values(&list), vec![10, 25]);
    assert_eq!(list.size(), 2);
    assert_eq!(list.to_string(), "[10, 25]");
}

#[test]
fn failed_operations_leave_list_unchanged() {
    let mut list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
    let before = list.clone();

    assert!(matches!(
        list.insert_at(5, 0),
        Err(ListError::IndexOutOfRange { index: 5, size: 3 })
    ));
    assert!(list.remove_at(3).is_err());
    assert!(!list.remove(&9));
    assert_eq!(list, before);

    let mut empty: LinkedList<i32> = LinkedList::new();
    assert_eq!(empty.pop_front(), Err(ListError::Empty));
    assert_eq!(empty.pop_back(), Err(ListError::Empty));
    assert!(empty.is_empty());
}

#[test]
fn every_sort_handles_the_sample() {
    let sorts: [fn(&mut [i32]); 3] = [insertion_sort, selection_sort, bubble_sort];
    for sort in sorts {
        let mut arr = [5, 2, 9, 1, 5, 6];
        sort(&mut arr);
        assert_eq!(arr, [1, 2, 5, 5, 6, 9]);
    }
}

/// Orders by the number only, so the tag shows where each duplicate ended up.
#[derive(Debug, Clone, Copy)]
struct Tagged(i32, char);

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

#[test]
fn stable_sorts_keep_duplicate_order() {
    let input = [
        Tagged(5, 'a'),
        Tagged(2, 'b'),
        Tagged(9, 'c'),
        Tagged(1, 'd'),
        Tagged(5, 'e'),
        Tagged(6, 'f'),
    ];

    let stable: [fn(&mut [Tagged]); 2] = [insertion_sort, bubble_sort];
    for sort in stable {
        let mut arr = input;
        sort(&mut arr);
        let keys: Vec<i32> = arr.iter().map(|t| t.0).collect();
        let tags: String = arr.iter().map(|t| t.1).collect();
        assert_eq!(keys, vec![1, 2, 5, 5, 6, 9]);
        assert_eq!(tags, "dbaefc");
    }
}

#[test]
fn stack_demo_sequence() {
    let mut stack = Stack::new();
    stack.push(10);
    stack.push(20);
    stack.push(30);
    assert_eq!(stack.to_string(), "[10, 20, 30]");
    assert_eq!(stack.peek(), Some(&30));
    assert_eq!(stack.pop(), Some(30));
    assert_eq!(stack.to_string(), "[10, 20]");
}

#[test]
fn search_after_sort() {
    let mut arr = [13, 1, 9, 3, 11, 5, 7];
    selection_sort(&mut arr);
    assert_eq!(binary_search(&arr, &7), Some(3));
    assert_eq!(binary_search(&arr, &8), None);
}
