use anyhow::Context;
use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};
use stayease_booking::money::format_amount;
use stayease_booking::{
    BookingForm, ContactForm, DateRange, FilterCriteria, PriceRange, Room, RoomCatalog, Settings,
    TypeFilter,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stayease", about = "Browse rooms, check availability and book a stay")]
struct Cli {
    /// JSON catalog to use instead of the built-in rooms
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List rooms matching the filters
    Rooms {
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long = "type", default_value = "All")]
        room_type: TypeFilter,
        #[arg(long)]
        min: Option<u32>,
        #[arg(long)]
        max: Option<u32>,
        #[arg(long)]
        from: Option<NaiveDate>,
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// Show one room and its blocked dates
    Room {
        id: String,
        /// Month to show blocked dates for, as YYYY-MM
        #[arg(long)]
        month: Option<String>,
    },
    /// Validate a booking and print the confirmation
    Book {
        #[arg(long)]
        room: Option<String>,
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long)]
        checkin: Option<NaiveDate>,
        #[arg(long)]
        checkout: Option<NaiveDate>,
        #[arg(long, default_value_t = 1)]
        guests: u32,
        #[arg(long)]
        promo: Option<String>,
        #[arg(long)]
        requests: Option<String>,
    },
    /// Send a message to the front desk
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::from_env().context("failed to load settings")?;
    let catalog = match &cli.catalog {
        Some(path) => RoomCatalog::load(path)
            .with_context(|| format!("failed to load catalog from {}", path.display()))?,
        None => RoomCatalog::seeded(),
    };

    match cli.command {
        Command::Rooms {
            location,
            room_type,
            min,
            max,
            from,
            to,
        } => {
            let price = PriceRange::new(
                min.unwrap_or(settings.default_price_range.min()),
                max.unwrap_or(settings.default_price_range.max()),
            )?;
            let criteria = FilterCriteria {
                location,
                room_type,
                price,
                dates: DateRange::from_optional(from, to)?,
            };

            let rooms = catalog.search(&criteria);
            if rooms.is_empty() {
                println!("No rooms match your filters.");
            }
            for room in rooms {
                print_card(room, &settings.currency);
            }
        }
        Command::Room { id, month } => match catalog.find(&id) {
            Some(room) => print_detail(room, month.as_deref(), &settings.currency)?,
            None => {
                println!("Room not found. Please browse our available rooms.");
            }
        },
        Command::Book {
            room,
            name,
            email,
            phone,
            checkin,
            checkout,
            guests,
            promo,
            requests,
        } => {
            let form = BookingForm {
                name,
                email,
                phone,
                checkin,
                checkout,
                guests,
                room_id: room,
                requests,
                promo,
            };
            let calculator = settings.pricing_calculator();

            match form.validate(&catalog) {
                Ok(request) => {
                    let confirmation = request.confirm(&calculator, &catalog)?;
                    println!(
                        "Booking created (demo): {}",
                        confirmation.headline(&settings.currency)
                    );
                    println!("{}", confirmation.render(&settings.currency));
                }
                Err(errors) => {
                    for error in &errors.errors {
                        println!("{}", error);
                    }
                    anyhow::bail!("booking form has {} invalid field(s)", errors.errors.len());
                }
            }
        }
        Command::Contact {
            name,
            email,
            message,
        } => {
            let form = ContactForm {
                name,
                email,
                message,
            };
            match form.validate() {
                Ok(_) => println!("{}", stayease_booking::contact::ACKNOWLEDGEMENT),
                Err(errors) => {
                    for error in &errors.errors {
                        println!("{}", error);
                    }
                    anyhow::bail!("contact form has {} invalid field(s)", errors.errors.len());
                }
            }
        }
    }

    Ok(())
}

fn print_card(room: &Room, currency: &str) {
    println!(
        "{} | {} | {} | {} | {}/night | {:.1} ({})",
        room.id,
        room.name,
        room.room_type,
        room.location,
        format_amount(currency, u64::from(room.price_per_night)),
        room.rating,
        room.reviews
    );
}

fn print_detail(room: &Room, month: Option<&str>, currency: &str) -> anyhow::Result<()> {
    println!("{} ({})", room.name, room.room_type);
    println!("{}", room.location);
    println!(
        "{}/night | {:.1} ({} reviews)",
        format_amount(currency, u64::from(room.price_per_night)),
        room.rating,
        room.reviews
    );
    println!("{}", room.description);
    println!("Amenities: {}", room.amenities.join(", "));

    let blocked: Vec<NaiveDate> = match month {
        Some(month) => {
            let first = NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d")
                .with_context(|| format!("invalid month '{}', expected YYYY-MM", month))?;
            room.unavailable_in_month(first.year(), first.month())
        }
        None => room.unavailable_dates.iter().copied().collect(),
    };
    let blocked: Vec<String> = blocked.iter().map(|d| d.to_string()).collect();
    println!("Unavailable: {}", blocked.join(", "));
    Ok(())
}
