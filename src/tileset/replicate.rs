//! Sharing one row stream between independent readers.
//!
//! A [`Replica`] is a cursor into a shared arena of rows. Rows are pulled
//! from the source the first time any reader reaches them, kept while a
//! lagging reader still needs them, and released once every live cursor
//! has moved past. Cursors are plain row numbers, so the arena never holds
//! references back to its readers.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Rows shared by all readers of one source.
struct RowArena<I: Iterator> {
    source: I,
    /// Cached rows; `rows[0]` is row number `first`.
    rows: VecDeque<Rc<I::Item>>,
    first: usize,
    /// Next row number for each reader, `None` once the reader is dropped.
    cursors: Vec<Option<usize>>,
    exhausted: bool,
    pulled: usize,
}

impl<I: Iterator> RowArena<I> {
    fn next_for(&mut self, reader: usize) -> Option<Rc<I::Item>> {
        let cursor = self.cursors.get(reader).copied().flatten()?;
        let offset = cursor - self.first;

        if offset == self.rows.len() {
            if self.exhausted {
                return None;
            }
            match self.source.next() {
                Some(row) => {
                    self.rows.push_back(Rc::new(row));
                    self.pulled += 1;
                }
                None => {
                    self.exhausted = true;
                    return None;
                }
            }
        }

        let row = self.rows.get(offset).map(Rc::clone)?;
        self.cursors[reader] = Some(cursor + 1);
        self.release();
        Some(row)
    }

    fn detach(&mut self, reader: usize) {
        if let Some(cursor) = self.cursors.get_mut(reader) {
            *cursor = None;
        }
        self.release();
    }

    /// Drop rows that no live reader can still reach.
    fn release(&mut self) {
        let Some(lowest) = self.cursors.iter().flatten().min().copied() else {
            self.first += self.rows.len();
            self.rows.clear();
            return;
        };
        while self.first < lowest && self.rows.pop_front().is_some() {
            self.first += 1;
        }
    }
}

/// Splits one row stream into independent readers.
pub struct TileReplicator;

impl TileReplicator {
    /// Create `readers` replicas of `source`.
    ///
    /// Each replica yields every source row in order, at its own pace.
    /// The source is advanced at most once per row.
    pub fn replicate<I: Iterator>(source: I, readers: usize) -> Vec<Replica<I>> {
        let arena = Rc::new(RefCell::new(RowArena {
            source,
            rows: VecDeque::new(),
            first: 0,
            cursors: vec![Some(0); readers],
            exhausted: false,
            pulled: 0,
        }));

        (0..readers)
            .map(|reader| Replica {
                arena: Rc::clone(&arena),
                reader,
            })
            .collect()
    }
}

/// One reader over a replicated row stream.
pub struct Replica<I: Iterator> {
    arena: Rc<RefCell<RowArena<I>>>,
    reader: usize,
}

impl<I: Iterator> Replica<I> {
    /// Rows currently held for lagging readers.
    pub fn buffered(&self) -> usize {
        self.arena.borrow().rows.len()
    }

    /// Rows pulled from the source so far, across all readers.
    pub fn pulled(&self) -> usize {
        self.arena.borrow().pulled
    }
}

impl<I: Iterator> Iterator for Replica<I> {
    type Item = Rc<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        self.arena.borrow_mut().next_for(self.reader)
    }
}

impl<I: Iterator> Drop for Replica<I> {
    fn drop(&mut self) {
        self.arena.borrow_mut().detach(self.reader);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counted(n: usize, pulls: &Cell<usize>) -> impl Iterator<Item = Vec<usize>> + '_ {
        (0..n).map(move |i| {
            pulls.set(pulls.get() + 1);
            vec![i, i * 10]
        })
    }

    #[test]
    fn test_every_reader_sees_every_row() {
        let pulls = Cell::new(0);
        let replicas = TileReplicator::replicate(counted(5, &pulls), 3);
        for replica in replicas {
            let rows: Vec<Vec<usize>> = replica.map(|r| (*r).clone()).collect();
            assert_eq!(rows, (0..5).map(|i| vec![i, i * 10]).collect::<Vec<_>>());
        }
        assert_eq!(pulls.get(), 5);
    }

    #[test]
    fn test_uneven_interleaving() {
        let pulls = Cell::new(0);
        let mut replicas = TileReplicator::replicate(counted(6, &pulls), 4);
        let mut seen: Vec<Vec<usize>> = vec![Vec::new(); 4];

        // Reader i pulls i + 1 rows per round until all are exhausted
        let mut live = true;
        while live {
            live = false;
            for (i, replica) in replicas.iter_mut().enumerate() {
                for _ in 0..=i {
                    if let Some(row) = replica.next() {
                        seen[i].push(row[0]);
                        live = true;
                    }
                }
            }
        }

        for rows in &seen {
            assert_eq!(rows, &vec![0, 1, 2, 3, 4, 5]);
        }
        assert_eq!(pulls.get(), 6);
    }

    #[test]
    fn test_rows_are_shared_not_copied() {
        let mut replicas = TileReplicator::replicate(vec![vec![1u8, 2, 3]].into_iter(), 2);
        let a = replicas[0].next().unwrap();
        let b = replicas[1].next().unwrap();
        assert!(Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_rows_released_after_all_readers_pass() {
        let mut replicas = TileReplicator::replicate(0..10, 2);
        for _ in 0..4 {
            replicas[0].next();
        }
        assert_eq!(replicas[0].buffered(), 4);
        assert_eq!(replicas[0].pulled(), 4);

        replicas[1].next();
        replicas[1].next();
        assert_eq!(replicas[0].buffered(), 2);

        for _ in 0..2 {
            replicas[1].next();
        }
        assert_eq!(replicas[0].buffered(), 0);
    }

    #[test]
    fn test_dropped_reader_releases_rows() {
        let mut replicas = TileReplicator::replicate(0..10, 2);
        for _ in 0..5 {
            replicas[0].next();
        }
        assert_eq!(replicas[0].buffered(), 5);

        let lagging = replicas.pop().unwrap();
        drop(lagging);
        assert_eq!(replicas[0].buffered(), 0);
        assert_eq!(replicas[0].next().map(|r| *r), Some(5));
    }

    #[test]
    fn test_exhausted_reader_stays_exhausted() {
        let mut replicas = TileReplicator::replicate(0..2, 2);
        let r = &mut replicas[0];
        assert_eq!(r.next().map(|v| *v), Some(0));
        assert_eq!(r.next().map(|v| *v), Some(1));
        assert!(r.next().is_none());
        assert!(r.next().is_none());

        let rest: Vec<i32> = replicas.pop().unwrap().map(|v| *v).collect();
        assert_eq!(rest, vec![0, 1]);
    }

    #[test]
    fn test_zero_readers() {
        let replicas = TileReplicator::replicate(0..3, 0);
        assert!(replicas.is_empty());
    }
}
