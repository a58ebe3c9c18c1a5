use crate::strategy::Discipline;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

#[derive(Debug, Clone)]
struct PriorityEntry<K, T> {
    item: T,
    key: K,
    seq: u64,
}

impl<K: PartialOrd, T> PriorityEntry<K, T> {
    /// Ascending by key, then by insertion.
    fn order(&self, other: &Self) -> Ordering {
        self.key
            .partial_cmp(&other.key)
            .unwrap_or(Ordering::Equal)
            .then(self.seq.cmp(&other.seq))
    }
}

impl<K: PartialOrd, T> PartialEq for PriorityEntry<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.order(other) == Ordering::Equal
    }
}

impl<K: PartialOrd, T> Eq for PriorityEntry<K, T> {}

impl<K: PartialOrd, T> PartialOrd for PriorityEntry<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: PartialOrd, T> Ord for PriorityEntry<K, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.order(self)
    }
}

/// Min-priority queue. Equal keys come out in insertion order.
#[derive(Debug, Clone)]
pub struct PrioritySelector<K, T> {
    seq: u64,
    heap: BinaryHeap<PriorityEntry<K, T>>,
}

impl<K: PartialOrd, T> Default for PrioritySelector<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialOrd, T> PrioritySelector<K, T> {
    pub fn new() -> Self {
        Self {
            seq: 0,
            heap: BinaryHeap::new(),
        }
    }

    pub fn insert(&mut self, item: T, key: K) {
        self.heap.push(PriorityEntry {
            item,
            key,
            seq: self.seq,
        });
        self.seq += 1;
    }

    pub fn extract_min(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.item)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.seq = 0;
    }

    /// Items in the order `extract_min` would return them.
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Copy,
    {
        let mut entries: Vec<&PriorityEntry<K, T>> = self.heap.iter().collect();
        entries.sort_by(|a, b| a.order(b));
        entries.into_iter().map(|entry| entry.item).collect()
    }
}

#[derive(Debug, Clone)]
pub(crate) enum Frontier<Cost> {
    Priority(PrioritySelector<Cost, usize>),
    Queue(VecDeque<usize>),
    Stack(Vec<usize>),
}

impl<Cost: PartialOrd> Frontier<Cost> {
    pub(crate) fn new(discipline: Discipline) -> Self {
        match discipline {
            Discipline::Priority(_) => Frontier::Priority(PrioritySelector::new()),
            Discipline::Fifo => Frontier::Queue(VecDeque::new()),
            Discipline::Lifo => Frontier::Stack(Vec::new()),
        }
    }

    pub(crate) fn reset(&mut self, discipline: Discipline) {
        let same_kind = matches!(
            (&*self, discipline),
            (Frontier::Priority(_), Discipline::Priority(_))
                | (Frontier::Queue(_), Discipline::Fifo)
                | (Frontier::Stack(_), Discipline::Lifo)
        );
        if !same_kind {
            *self = Self::new(discipline);
            return;
        }
        match self {
            Frontier::Priority(selector) => selector.clear(),
            Frontier::Queue(queue) => queue.clear(),
            Frontier::Stack(stack) => stack.clear(),
        }
    }

    pub(crate) fn push(&mut self, index: usize, key: Cost) {
        match self {
            Frontier::Priority(selector) => selector.insert(index, key),
            Frontier::Queue(queue) => queue.push_back(index),
            Frontier::Stack(stack) => stack.push(index),
        }
    }

    pub(crate) fn pop(&mut self) -> Option<usize> {
        match self {
            Frontier::Priority(selector) => selector.extract_min(),
            Frontier::Queue(queue) => queue.pop_front(),
            Frontier::Stack(stack) => stack.pop(),
        }
    }

    pub(crate) fn snapshot(&self) -> Vec<usize> {
        match self {
            Frontier::Priority(selector) => selector.snapshot(),
            Frontier::Queue(queue) => queue.iter().copied().collect(),
            Frontier::Stack(stack) => stack.clone(),
        }
    }
}
