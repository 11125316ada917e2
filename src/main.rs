use rsvpui::{Kiosk, SiteConfig};

type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() -> AppResult<()> {
    let config = SiteConfig::default().with_title("RSVP Demo");

    match Kiosk::new(config).run()? {
        Some(submission) => println!("{}", serde_json::to_string_pretty(&submission)?),
        None => eprintln!("no RSVP sent"),
    }
    Ok(())
}
