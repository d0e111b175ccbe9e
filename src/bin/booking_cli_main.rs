// booking_cli_main.rs
use ride_booking::booking::{BookingLedger, CancelOutcome, PaymentMethod};
use ride_booking::config::LedgerConfig;
use ride_booking::fare_model::{quote, route_image, Location, VehicleClass};
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;

fn prompt(label: &str) -> String {
    print!("{}", label);
    let _ = stdout().flush();
    let mut input = String::new();
    match stdin().read_line(&mut input) {
        // EOF
        Ok(0) => {
            println!();
            std::process::exit(0);
        }
        Ok(_) => {}
        Err(_) => return String::new(),
    }
    input.trim().to_string()
}

/// Accepts either a list number (1-based) or an exact display name.
fn pick<T: Copy + std::str::FromStr>(options: &[T], input: &str) -> Option<T> {
    match input.parse::<usize>() {
        Ok(n) if n >= 1 && n <= options.len() => Some(options[n - 1]),
        _ => input.parse::<T>().ok(),
    }
}

fn choose_location(label: &str) -> Option<Location> {
    for (i, loc) in Location::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, loc);
    }
    let choice = pick(&Location::ALL, &prompt(label));
    if choice.is_none() {
        println!("Unknown location.");
    }
    choice
}

fn choose_vehicle() -> Option<VehicleClass> {
    for (i, class) in VehicleClass::ALL.iter().enumerate() {
        println!(
            "  {}. {} (up to {} passengers)",
            i + 1,
            class,
            class.passengers()
        );
    }
    let choice = pick(&VehicleClass::ALL, &prompt("Vehicle: "));
    if choice.is_none() {
        println!("Unknown vehicle class.");
    }
    choice
}

fn choose_trip() -> Option<(VehicleClass, Location, Location)> {
    let class = choose_vehicle()?;
    let start = choose_location("Pickup: ")?;
    let end = choose_location("Drop-off: ")?;
    Some((class, start, end))
}

fn show_quote(ledger: &BookingLedger) {
    let Some((class, start, end)) = choose_trip() else {
        return;
    };
    let fare = quote(ledger.distance_table(), class, start, end);
    let symbol = &ledger.config().currency_symbol;
    println!(
        "{} {} → {}: {:.1} km, {}{:.2} (map: {})",
        class,
        start,
        end,
        fare.distance,
        symbol,
        f64::from(fare.cost),
        route_image(start, end)
    );
}

fn book(ledger: &mut BookingLedger) {
    let Some((class, start, end)) = choose_trip() else {
        return;
    };
    let payment = match prompt("Payment (Cash/Wallet) [Cash]: ").as_str() {
        "" => PaymentMethod::Cash,
        other => match other.parse::<PaymentMethod>() {
            Ok(method) => method,
            Err(e) => {
                println!("{}", e);
                return;
            }
        },
    };
    match ledger.create(class, start, end, payment) {
        Ok(booking) => println!(
            "Booked {}: {:.1} km, {}{:.2}",
            booking.id,
            booking.distance,
            ledger.config().currency_symbol,
            f64::from(booking.cost)
        ),
        Err(e) => eprintln!("Error saving booking: {}", e),
    }
}

fn cancel(ledger: &mut BookingLedger) {
    let id = prompt("Booking ID to cancel: ");
    match ledger.cancel(&id) {
        Ok(CancelOutcome::Cancelled) => println!("Your booking has been cancelled."),
        Ok(CancelOutcome::AlreadyCancelled) => println!("Booking {} was already cancelled.", id),
        Ok(CancelOutcome::NotFound) => println!("No booking with ID {}.", id),
        Err(e) => eprintln!("Error cancelling booking: {}", e),
    }
}

fn show_history(ledger: &BookingLedger) {
    if ledger.is_empty() {
        println!("No past bookings yet.");
        return;
    }
    let symbol = &ledger.config().currency_symbol;
    for booking in ledger.bookings() {
        println!(
            "[{}] {} | {} | {} to {} | {:.1} km | {}{:.2} ({})",
            booking.status,
            booking.id,
            booking.vehicle_type,
            booking.start,
            booking.end,
            booking.distance,
            symbol,
            f64::from(booking.cost),
            booking.payment_method
        );
    }
}

fn show_report(ledger: &BookingLedger) {
    let summary = ledger.summary();
    println!("Report Summary:");
    println!("Bookings: {}", summary.total);
    println!("Active: {}", summary.active);
    println!("Cancelled: {}", summary.cancelled);
    println!(
        "Active revenue: {}{:.2}",
        ledger.config().currency_symbol,
        summary.active_revenue as f64
    );
}

fn export(ledger: &BookingLedger) {
    let input = prompt("CSV path [bookings.csv]: ");
    let path = if input.is_empty() {
        PathBuf::from("bookings.csv")
    } else {
        PathBuf::from(input)
    };
    match ledger.export_csv(&path) {
        Ok(()) => println!("Exported to {}", path.display()),
        Err(e) => eprintln!("Error exporting bookings: {}", e),
    }
}

fn clear(ledger: &mut BookingLedger) {
    if prompt("Type 'yes' to delete every booking: ") != "yes" {
        println!("Nothing cleared.");
        return;
    }
    match ledger.clear_all() {
        Ok(()) => println!("All bookings cleared."),
        Err(e) => eprintln!("Error clearing bookings: {}", e),
    }
}

fn main() {
    env_logger::init();
    let mut ledger = BookingLedger::open(LedgerConfig::from_env());

    loop {
        println!("\nRide Booking CLI");
        println!("1. List Locations");
        println!("2. Fare Quote");
        println!("3. Book a Ride");
        println!("4. Cancel a Booking");
        println!("5. Booking History");
        println!("6. Generate Report");
        println!("7. Export History to CSV");
        println!("8. Clear All Bookings");
        println!("9. Exit");
        let choice = prompt("Enter your choice: ").parse::<u32>().unwrap_or(0);
        match choice {
            1 => {
                for loc in Location::ALL {
                    println!("  {}", loc);
                }
            }
            2 => show_quote(&ledger),
            3 => book(&mut ledger),
            4 => cancel(&mut ledger),
            5 => show_history(&ledger),
            6 => show_report(&ledger),
            7 => export(&ledger),
            8 => clear(&mut ledger),
            9 => {
                println!("Exiting CLI.");
                break;
            }
            _ => println!("Invalid choice. Try again."),
        }
    }
}
