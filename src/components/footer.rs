use std::fmt;

pub struct Footer;

impl fmt::Display for Footer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "──────────────────────────────────────────")?;
        writeln!(f, "About HomeFinder")?;
        writeln!(
            f,
            "  Your trusted partner in finding the perfect property. We connect buyers,"
        )?;
        writeln!(f, "  sellers, and renters with the best properties across the country.")?;
        writeln!(f, "Quick Links: Home · Properties · About Us · Contact")?;
        writeln!(f, "Contact Us: 123 Real Estate Ave, City, State 12345 · (555) 123-4567")?;
        write!(f, "© HomeFinder. All rights reserved.")
    }
}
