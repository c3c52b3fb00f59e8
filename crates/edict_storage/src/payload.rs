//! Interned, reference-counted order payloads.
//!
//! Thousands of orders per turn repeat the same parameter text ("guard",
//! "work", "entertain 200"). The [`PayloadStore`] keeps one record per
//! distinct `(text, locale)` pair and hands out counted [`PayloadRef`]s.
//! Cloning a ref adds a reference, dropping one releases it, and a record
//! is freed when its last reference goes away.
//!
//! The store is append-only within an *epoch*: a freed slot is never
//! handed out again until [`PayloadStore::clear_all`] tears the whole pool
//! down at the end of a processing phase and starts a new epoch. Refs that
//! outlive a teardown become stale; releasing them is a logged no-op.
//!
//! The store is single-threaded (`Rc`-shared); all order processing for a
//! phase happens on one thread.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use edict_foundation::{Error, LocaleId, Result};
use tracing::{debug, warn};

/// Stable identifier of a payload record.
///
/// Handles compare equal exactly when they name the same record, so two
/// orders with identical parameter text compare by handle, not by text.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PayloadHandle {
    index: u32,
    epoch: u32,
}

impl PayloadHandle {
    /// Returns the slot index.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.index
    }

    /// Returns the store epoch this handle was issued in.
    #[must_use]
    pub const fn epoch(self) -> u32 {
        self.epoch
    }
}

impl fmt::Debug for PayloadHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PayloadHandle({}@{})", self.index, self.epoch)
    }
}

/// A snapshot of one payload record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PayloadRecord {
    /// Parameter text; `None` for a keyword given no parameter at all.
    pub text: Option<Rc<str>>,
    /// Locale the text was written in.
    pub locale: LocaleId,
    /// Number of live references.
    pub refcount: u32,
}

/// Summary of a store teardown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TeardownReport {
    /// Records alive at teardown.
    pub records: usize,
    /// Records that still had references held elsewhere.
    pub outstanding: usize,
    /// Total references still held across those records.
    pub outstanding_refs: u64,
}

impl TeardownReport {
    /// Returns true if every reference had been released.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.outstanding == 0
    }
}

/// Counters describing the store's current state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StoreStats {
    /// Live records.
    pub records: usize,
    /// Slots appended this epoch, live or freed.
    pub slots: usize,
    /// Sum of all live references.
    pub references: u64,
    /// Current epoch.
    pub epoch: u32,
}

#[derive(Debug)]
struct Record {
    text: Option<Rc<str>>,
    locale: LocaleId,
    refs: u32,
}

#[derive(Debug, Default)]
struct Pool {
    /// Append-only slots; `None` once freed.
    records: Vec<Option<Record>>,
    /// Locale -> text -> slot, for records carrying text.
    texts: HashMap<LocaleId, HashMap<Rc<str>, u32>>,
    /// Locale -> slot, for the canonical "no text" record.
    absent: HashMap<LocaleId, u32>,
    epoch: u32,
    live: usize,
}

impl Pool {
    fn find(&self, text: Option<&str>, locale: LocaleId) -> Option<u32> {
        match text {
            Some(text) => self.texts.get(&locale)?.get(text).copied(),
            None => self.absent.get(&locale).copied(),
        }
    }

    fn record_mut(&mut self, handle: PayloadHandle) -> Option<&mut Record> {
        if handle.epoch != self.epoch {
            return None;
        }
        self.records.get_mut(handle.index as usize)?.as_mut()
    }

    fn append(&mut self, text: Option<&str>, locale: LocaleId) -> u32 {
        let index = u32::try_from(self.records.len()).expect("too many payload records");
        let text: Option<Rc<str>> = text.map(Rc::from);
        match &text {
            Some(text) => {
                self.texts
                    .entry(locale)
                    .or_default()
                    .insert(Rc::clone(text), index);
            }
            None => {
                self.absent.insert(locale, index);
            }
        }
        self.records.push(Some(Record {
            text,
            locale,
            refs: 0,
        }));
        self.live += 1;
        index
    }

    fn unlink(&mut self, record: &Record) {
        match &record.text {
            Some(text) => {
                if let Some(by_text) = self.texts.get_mut(&record.locale) {
                    by_text.remove(text);
                }
            }
            None => {
                self.absent.remove(&record.locale);
            }
        }
        self.live -= 1;
    }
}

/// The payload interning pool.
///
/// Cloning a `PayloadStore` yields another handle to the same pool.
#[derive(Clone, Default)]
pub struct PayloadStore {
    pool: Rc<RefCell<Pool>>,
}

impl PayloadStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns `text` under `locale` and returns a counted reference.
    ///
    /// Identical `(text, locale)` pairs share one record. `None` stands for
    /// a keyword that received no parameter and is distinct from `""`.
    #[must_use]
    pub fn intern(&self, text: Option<&str>, locale: LocaleId) -> PayloadRef {
        let mut pool = self.pool.borrow_mut();
        let index = match pool.find(text, locale) {
            Some(index) => index,
            None => pool.append(text, locale),
        };
        let epoch = pool.epoch;
        let record = pool.records[index as usize]
            .as_mut()
            .expect("indexed payload record is live");
        record.refs += 1;

        PayloadRef {
            store: self.clone(),
            handle: PayloadHandle { index, epoch },
            text: record.text.clone(),
            locale: record.locale,
        }
    }

    /// Acquires another reference to an existing record.
    ///
    /// # Errors
    ///
    /// Returns a stale payload error if the record was freed or belongs to
    /// a torn-down epoch.
    pub fn load(&self, handle: PayloadHandle) -> Result<PayloadRef> {
        let mut pool = self.pool.borrow_mut();
        let Some(record) = pool.record_mut(handle) else {
            return Err(Error::stale_payload(handle.index, handle.epoch));
        };
        record.refs += 1;

        Ok(PayloadRef {
            store: self.clone(),
            handle,
            text: record.text.clone(),
            locale: record.locale,
        })
    }

    /// Returns a snapshot of a live record.
    #[must_use]
    pub fn record(&self, handle: PayloadHandle) -> Option<PayloadRecord> {
        let mut pool = self.pool.borrow_mut();
        pool.record_mut(handle).map(|record| PayloadRecord {
            text: record.text.clone(),
            locale: record.locale,
            refcount: record.refs,
        })
    }

    /// Returns the number of live references to a record (0 if it is gone).
    #[must_use]
    pub fn refcount(&self, handle: PayloadHandle) -> u32 {
        self.record(handle).map_or(0, |record| record.refcount)
    }

    /// Returns true if `handle` names a live record.
    #[must_use]
    pub fn contains(&self, handle: PayloadHandle) -> bool {
        self.refcount(handle) > 0
    }

    /// Returns the number of live records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pool.borrow().live
    }

    /// Returns true if no records are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current epoch.
    #[must_use]
    pub fn epoch(&self) -> u32 {
        self.pool.borrow().epoch
    }

    /// Returns counters describing the store.
    #[must_use]
    pub fn stats(&self) -> StoreStats {
        let pool = self.pool.borrow();
        StoreStats {
            records: pool.live,
            slots: pool.records.len(),
            references: pool
                .records
                .iter()
                .flatten()
                .map(|record| u64::from(record.refs))
                .sum(),
            epoch: pool.epoch,
        }
    }

    /// Returns true if both values refer to the same pool.
    #[must_use]
    pub fn same_pool(&self, other: &PayloadStore) -> bool {
        Rc::ptr_eq(&self.pool, &other.pool)
    }

    /// Drops every record and starts a new epoch.
    ///
    /// Meant for phase boundaries only. Records still referenced elsewhere
    /// are dropped anyway; that imbalance is logged and reported, and the
    /// refs still out there become stale.
    pub fn clear_all(&self) -> TeardownReport {
        let mut pool = self.pool.borrow_mut();
        let mut report = TeardownReport::default();
        for record in pool.records.iter().flatten() {
            report.records += 1;
            if record.refs > 0 {
                report.outstanding += 1;
                report.outstanding_refs += u64::from(record.refs);
            }
        }

        if report.is_clean() {
            debug!(records = report.records, epoch = pool.epoch, "payload store cleared");
        } else {
            warn!(
                records = report.records,
                outstanding = report.outstanding,
                references = report.outstanding_refs,
                epoch = pool.epoch,
                "payload store torn down with outstanding references"
            );
        }

        pool.records.clear();
        pool.texts.clear();
        pool.absent.clear();
        pool.live = 0;
        pool.epoch = pool.epoch.wrapping_add(1);
        report
    }

    fn retain(&self, handle: PayloadHandle) {
        let mut pool = self.pool.borrow_mut();
        match pool.record_mut(handle) {
            Some(record) => record.refs += 1,
            None => debug!(?handle, "copied a stale payload reference"),
        }
    }

    fn release(&self, handle: PayloadHandle) {
        let Ok(mut pool) = self.pool.try_borrow_mut() else {
            warn!(?handle, "payload released while the store is busy");
            return;
        };
        if handle.epoch != pool.epoch {
            debug!(?handle, epoch = pool.epoch, "released a payload from a torn-down epoch");
            return;
        }
        let Some(slot) = pool.records.get_mut(handle.index as usize) else {
            warn!(?handle, "released an unknown payload");
            return;
        };
        let Some(record) = slot.as_mut() else {
            warn!(?handle, "released an already freed payload");
            return;
        };
        record.refs -= 1;
        if record.refs == 0 {
            if let Some(record) = slot.take() {
                pool.unlink(&record);
            }
        }
    }
}

impl fmt::Debug for PayloadStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.stats();
        f.debug_struct("PayloadStore")
            .field("records", &stats.records)
            .field("references", &stats.references)
            .field("epoch", &stats.epoch)
            .finish()
    }
}

/// A counted reference to an interned payload.
///
/// Holding a `PayloadRef` keeps its record alive. The text is also cached
/// on the ref itself, so it stays readable even after a teardown.
pub struct PayloadRef {
    store: PayloadStore,
    handle: PayloadHandle,
    text: Option<Rc<str>>,
    locale: LocaleId,
}

impl PayloadRef {
    /// Returns the record's handle.
    #[must_use]
    pub fn handle(&self) -> PayloadHandle {
        self.handle
    }

    /// Returns the parameter text, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns a shared pointer to the parameter text, if any.
    #[must_use]
    pub fn shared_text(&self) -> Option<Rc<str>> {
        self.text.clone()
    }

    /// Returns the locale the text was written in.
    #[must_use]
    pub fn locale(&self) -> LocaleId {
        self.locale
    }

    /// Returns the store this ref belongs to.
    #[must_use]
    pub fn store(&self) -> &PayloadStore {
        &self.store
    }

    /// Returns true if the record is still live in its store.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.store.contains(self.handle)
    }

    /// Releases this reference now.
    pub fn release(self) {
        drop(self);
    }
}

impl Clone for PayloadRef {
    fn clone(&self) -> Self {
        self.store.retain(self.handle);
        Self {
            store: self.store.clone(),
            handle: self.handle,
            text: self.text.clone(),
            locale: self.locale,
        }
    }
}

impl Drop for PayloadRef {
    fn drop(&mut self) {
        self.store.release(self.handle);
    }
}

impl PartialEq for PayloadRef {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle && self.store.same_pool(&other.store)
    }
}

impl Eq for PayloadRef {}

impl Hash for PayloadRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.handle.hash(state);
    }
}

impl fmt::Debug for PayloadRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PayloadRef")
            .field("handle", &self.handle)
            .field("text", &self.text)
            .field("locale", &self.locale)
            .finish()
    }
}
