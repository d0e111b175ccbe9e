// ledger.rs
//
// The booking ledger: an ordered list of bookings mirrored to a JSON
// snapshot after every mutation, plus an append-only audit trail of
// create/cancel events. All operations run to completion on the caller's
// thread.

use crate::booking::audit_log::{append_entry, AuditAction};
use crate::booking::record::{generate_booking_id, Booking, BookingStatus, PaymentMethod};
use crate::booking::report::{export_csv, summarize, LedgerSummary};
use crate::config::LedgerConfig;
use crate::fare_model::{create_distance_table, quote, DistanceTable, Location, VehicleClass};
use crate::LedgerResult;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of a cancel request. Only `Cancelled` is a success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelOutcome {
    Cancelled,
    AlreadyCancelled,
    NotFound,
}

impl CancelOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CancelOutcome::Cancelled)
    }
}

#[derive(Debug)]
pub struct BookingLedger {
    config: LedgerConfig,
    table: DistanceTable,
    bookings: Vec<Booking>,
}

impl BookingLedger {
    /// Opens the ledger on the campus map and loads any existing snapshot.
    pub fn open(config: LedgerConfig) -> Self {
        Self::with_table(config, create_distance_table())
    }

    pub fn with_table(config: LedgerConfig, table: DistanceTable) -> Self {
        let mut ledger = Self {
            config,
            table,
            bookings: Vec::new(),
        };
        ledger.load();
        ledger
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub fn distance_table(&self) -> &DistanceTable {
        &self.table
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    pub fn active(&self) -> impl Iterator<Item = &Booking> {
        self.bookings.iter().filter(|b| b.is_active())
    }

    pub fn summary(&self) -> LedgerSummary {
        summarize(&self.bookings)
    }

    pub fn export_csv(&self, path: &Path) -> LedgerResult<()> {
        export_csv(path, &self.bookings)?;
        log::info!("Exported {} bookings to {}", self.bookings.len(), path.display());
        Ok(())
    }

    /// Prices and records a new trip.
    ///
    /// The snapshot is rewritten before the audit line is appended. If the
    /// snapshot cannot be written the booking is dropped from memory again
    /// and the error is returned. Once the snapshot is written the booking
    /// stands; a failed audit append is logged, not returned.
    pub fn create(
        &mut self,
        vehicle_type: VehicleClass,
        start: Location,
        end: Location,
        payment_method: PaymentMethod,
    ) -> LedgerResult<Booking> {
        let fare = quote(&self.table, vehicle_type, start, end);
        let booking = Booking::new(self.fresh_id(), fare, payment_method);
        self.bookings.push(booking.clone());

        if let Err(e) = self.save() {
            self.bookings.pop();
            return Err(e);
        }
        self.record_audit(AuditAction::Booked, &booking);

        log::info!(
            "Booked {} ({} {} -> {}, {:.1} km, cost {})",
            booking.id,
            booking.vehicle_type,
            booking.start,
            booking.end,
            booking.distance,
            booking.cost
        );
        Ok(booking)
    }

    /// Moves an active booking to `Cancelled`.
    ///
    /// Unknown ids and bookings that are already cancelled leave the ledger
    /// and both files untouched. A failed snapshot write restores the
    /// active status; a failed audit append is logged, not returned.
    pub fn cancel(&mut self, id: &str) -> LedgerResult<CancelOutcome> {
        let Some(index) = self.bookings.iter().position(|b| b.id == id) else {
            log::info!("Cancel requested for unknown booking {}", id);
            return Ok(CancelOutcome::NotFound);
        };
        if self.bookings[index].status.is_terminal() {
            log::info!("Booking {} is already cancelled", id);
            return Ok(CancelOutcome::AlreadyCancelled);
        }

        self.bookings[index].status = BookingStatus::Cancelled;
        if let Err(e) = self.save() {
            self.bookings[index].status = BookingStatus::Active;
            return Err(e);
        }
        self.record_audit(AuditAction::Cancelled, &self.bookings[index]);

        log::info!("Cancelled booking {}", id);
        Ok(CancelOutcome::Cancelled)
    }

    /// Replaces the in-memory bookings with the snapshot on disk. Any read
    /// or parse failure leaves the ledger empty.
    pub fn load(&mut self) {
        match read_snapshot(&self.config.snapshot_path) {
            Ok(bookings) => {
                log::info!(
                    "Loaded {} bookings from {}",
                    bookings.len(),
                    self.config.snapshot_path.display()
                );
                self.bookings = bookings;
            }
            Err(e) => {
                log::warn!(
                    "Could not load {} ({}), starting with an empty ledger",
                    self.config.snapshot_path.display(),
                    e
                );
                self.bookings.clear();
            }
        }
    }

    /// Drops every booking and rewrites the empty snapshot. The audit log
    /// keeps its history.
    pub fn clear_all(&mut self) -> LedgerResult<()> {
        let cleared = self.bookings.len();
        self.bookings.clear();
        self.save()?;
        log::info!("Cleared {} bookings", cleared);
        Ok(())
    }

    /// Writes the full snapshot next to its final path and renames it into
    /// place.
    pub fn save(&self) -> LedgerResult<()> {
        let path = &self.config.snapshot_path;
        let tmp = temp_path(path);
        let json = serde_json::to_string_pretty(&self.bookings)?;
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;
        log::debug!("Wrote {} bookings to {}", self.bookings.len(), path.display());
        Ok(())
    }

    fn record_audit(&self, action: AuditAction, booking: &Booking) {
        if let Err(e) = append_entry(
            &self.config.audit_log_path,
            action,
            booking,
            &self.config.currency_symbol,
        ) {
            log::error!(
                "Could not append {} for {} to {}: {}",
                action.tag(),
                booking.id,
                self.config.audit_log_path.display(),
                e
            );
        }
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = generate_booking_id();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

fn read_snapshot(path: &Path) -> LedgerResult<Vec<Booking>> {
    let data = fs::read_to_string(path)?;
    let bookings = serde_json::from_str(&data)?;
    Ok(bookings)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("bookings.json"));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn ledger_in(dir: &TempDir) -> BookingLedger {
        BookingLedger::open(LedgerConfig::in_dir(dir.path()))
    }

    #[test]
    fn create_prices_and_appends() {
        let dir = TempDir::new().unwrap();
        let mut ledger = ledger_in(&dir);
        let booking = ledger
            .create(VehicleClass::Car6, Location::PupMain, Location::Coc, PaymentMethod::Wallet)
            .unwrap();
        assert_eq!(booking.distance, 1.0);
        assert_eq!(booking.cost, 480);
        assert_eq!(booking.status, BookingStatus::Active);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get(&booking.id), Some(&booking));
    }

    #[test]
    fn cancel_twice_reports_already_cancelled() {
        let dir = TempDir::new().unwrap();
        let mut ledger = ledger_in(&dir);
        let booking = ledger
            .create(VehicleClass::Moto, Location::Cea, Location::Hasmin, PaymentMethod::Cash)
            .unwrap();

        assert_eq!(ledger.cancel(&booking.id).unwrap(), CancelOutcome::Cancelled);
        assert_eq!(
            ledger.get(&booking.id).map(|b| b.status),
            Some(BookingStatus::Cancelled)
        );
        assert_eq!(
            ledger.cancel(&booking.id).unwrap(),
            CancelOutcome::AlreadyCancelled
        );
        assert!(!CancelOutcome::AlreadyCancelled.is_success());
    }

    #[test]
    fn cancel_unknown_id_is_not_found() {
        let dir = TempDir::new().unwrap();
        let mut ledger = ledger_in(&dir);
        assert_eq!(ledger.cancel("deadbeef").unwrap(), CancelOutcome::NotFound);
        assert!(!dir.path().join("bookings.json").exists());
        assert!(!dir.path().join("booking_log.txt").exists());
    }

    #[test]
    fn missing_snapshot_loads_empty() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_in(&dir);
        assert!(ledger.is_empty());
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let mut ledger = ledger_in(&dir);
        ledger
            .create(VehicleClass::Car4, Location::ITech, Location::Condotel, PaymentMethod::Cash)
            .unwrap();
        assert!(dir.path().join("bookings.json").exists());
        assert!(!dir.path().join("bookings.json.tmp").exists());
    }

    #[test]
    fn failed_snapshot_write_rolls_back_create() {
        let dir = TempDir::new().unwrap();
        let config = LedgerConfig {
            snapshot_path: dir.path().join("missing-dir").join("bookings.json"),
            ..LedgerConfig::in_dir(dir.path())
        };
        let mut ledger = BookingLedger::open(config);
        let result = ledger.create(
            VehicleClass::Moto,
            Location::Coc,
            Location::Cea,
            PaymentMethod::Cash,
        );
        assert!(result.is_err());
        assert!(ledger.is_empty());
        assert!(!dir.path().join("booking_log.txt").exists());
    }

    #[test]
    fn failed_snapshot_write_rolls_back_cancel() {
        let dir = TempDir::new().unwrap();
        let mut ledger = ledger_in(&dir);
        let booking = ledger
            .create(VehicleClass::Moto, Location::Coc, Location::Cea, PaymentMethod::Cash)
            .unwrap();

        // A directory in the snapshot's place makes the rename fail.
        let snapshot = dir.path().join("bookings.json");
        fs::remove_file(&snapshot).unwrap();
        fs::create_dir(&snapshot).unwrap();

        assert!(ledger.cancel(&booking.id).is_err());
        assert_eq!(
            ledger.get(&booking.id).map(|b| b.status),
            Some(BookingStatus::Active)
        );
        let audit = fs::read_to_string(dir.path().join("booking_log.txt")).unwrap();
        assert_eq!(audit.lines().count(), 1);
    }

    #[test]
    fn audit_failure_does_not_undo_a_persisted_mutation() {
        let dir = TempDir::new().unwrap();
        let config = LedgerConfig {
            audit_log_path: dir.path().join("missing-dir").join("booking_log.txt"),
            ..LedgerConfig::in_dir(dir.path())
        };
        let mut ledger = BookingLedger::open(config.clone());
        let booking = ledger
            .create(VehicleClass::Car4, Location::Hasmin, Location::Cea, PaymentMethod::Cash)
            .unwrap();
        assert_eq!(ledger.cancel(&booking.id).unwrap(), CancelOutcome::Cancelled);

        let reopened = BookingLedger::open(config);
        assert_eq!(reopened.len(), 1);
        assert_eq!(
            reopened.get(&booking.id).map(|b| b.status),
            Some(BookingStatus::Cancelled)
        );
    }

    #[test]
    fn bad_table_entries_cannot_break_the_snapshot() {
        let dir = TempDir::new().unwrap();
        let table = DistanceTable::from_pairs([
            (Location::Coc, Location::Cea, f64::NAN),
            (Location::Coc, Location::Hasmin, f64::INFINITY),
            (Location::Cea, Location::Hasmin, 1.0e12),
        ]);
        let config = LedgerConfig::in_dir(dir.path());
        let mut ledger = BookingLedger::with_table(config.clone(), table);

        let nan = ledger
            .create(VehicleClass::Moto, Location::Coc, Location::Cea, PaymentMethod::Cash)
            .unwrap();
        let inf = ledger
            .create(VehicleClass::Moto, Location::Hasmin, Location::Coc, PaymentMethod::Cash)
            .unwrap();
        let far = ledger
            .create(VehicleClass::Car6, Location::Hasmin, Location::Cea, PaymentMethod::Cash)
            .unwrap();
        assert_eq!((nan.distance, nan.cost), (0.0, 75));
        assert_eq!((inf.distance, inf.cost), (0.0, 75));
        assert_eq!(far.cost, u32::MAX);

        let reopened = BookingLedger::open(config);
        assert_eq!(reopened.bookings(), ledger.bookings());
    }

    #[test]
    fn unmapped_route_books_at_minimum_fare() {
        let dir = TempDir::new().unwrap();
        let table = DistanceTable::from_pairs([(Location::PupMain, Location::Cea, 2.0)]);
        let mut ledger = BookingLedger::with_table(LedgerConfig::in_dir(dir.path()), table);
        let booking = ledger
            .create(VehicleClass::Moto, Location::Coc, Location::Hasmin, PaymentMethod::Cash)
            .unwrap();
        assert_eq!(booking.distance, 0.0);
        assert_eq!(booking.cost, 75);
    }
}
