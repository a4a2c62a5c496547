//! Clinic contact details and the help menu entries.

use serde::Serialize;

/// Static details shown on the appointment dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClinicContact {
    pub doctor: &'static str,
    pub credentials: &'static str,
    pub specialty: &'static str,
    pub position: &'static str,
    pub hospital: &'static str,
    pub chamber: &'static str,
    pub address: &'static str,
    pub landmark: &'static str,
    pub maps_url: &'static str,
    pub phone: &'static str,
    pub video_channel_url: &'static str,
    pub visiting_days: &'static str,
    pub visiting_hours: &'static str,
}

pub const CLINIC: ClinicContact = ClinicContact {
    doctor: "Dr. Muntasir Mahbub",
    credentials: "MBBS (DU), FCPS (ENT)",
    specialty: "ENT specialist and head & neck thyroid surgeon",
    position: "Associate Professor and Head of Department",
    hospital: "Khwaja Yunus Ali Medical College Hospital",
    chamber: "Madison Medical Services",
    address: "Sara Sandhani Tower, Plot 22/10, Shyamoli, Dhaka",
    landmark: "Opposite Shishumela Park",
    maps_url: "https://maps.app.goo.gl/6xvYWvfHXJxeqEDj8",
    phone: "01303801712",
    video_channel_url: "https://www.youtube.com/@drmuntasirmahbub2385",
    visiting_days: "Saturday, Sunday and Monday",
    visiting_hours: "10 AM – 12 PM",
};

impl ClinicContact {
    /// Lines rendered on the appointment dialog, in display order.
    pub fn appointment_lines(&self) -> Vec<String> {
        vec![
            self.doctor.to_string(),
            self.credentials.to_string(),
            self.specialty.to_string(),
            self.position.to_string(),
            self.hospital.to_string(),
            "Dhaka Chamber Address".to_string(),
            self.chamber.to_string(),
            self.address.to_string(),
            self.landmark.to_string(),
            format!("Map: {}", self.maps_url),
            format!("Serial number: {}", self.phone),
            format!("Visiting hours: {}, {}", self.visiting_days, self.visiting_hours),
        ]
    }

    /// `tel:` link for the serial number.
    pub fn phone_link(&self) -> String {
        format!("tel:{}", self.phone)
    }
}

/// Where a help entry leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "target")]
pub enum HelpTarget {
    Url(&'static str),
    Phone(&'static str),
    /// Opens the appointment dialog.
    Appointment,
}

/// Entries of the help dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HelpOption {
    WatchChannel,
    CallRepresentative,
    VisitInPerson,
    OnlineConsultation,
}

impl HelpOption {
    pub const ALL: [HelpOption; 4] = [
        HelpOption::WatchChannel,
        HelpOption::CallRepresentative,
        HelpOption::VisitInPerson,
        HelpOption::OnlineConsultation,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            HelpOption::WatchChannel => "Learn more on our YouTube channel",
            HelpOption::CallRepresentative => "Talk to our representative",
            HelpOption::VisitInPerson => "See the doctor in person",
            HelpOption::OnlineConsultation => "Consult the doctor online",
        }
    }

    pub const fn target(&self) -> HelpTarget {
        match self {
            HelpOption::WatchChannel => HelpTarget::Url(CLINIC.video_channel_url),
            HelpOption::CallRepresentative | HelpOption::OnlineConsultation => {
                HelpTarget::Phone(CLINIC.phone)
            }
            HelpOption::VisitInPerson => HelpTarget::Appointment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_in_person_visit_opens_appointment() {
        let appointments: Vec<HelpOption> = HelpOption::ALL
            .into_iter()
            .filter(|option| option.target() == HelpTarget::Appointment)
            .collect();
        assert_eq!(appointments, vec![HelpOption::VisitInPerson]);
    }

    #[test]
    fn phone_link() {
        assert_eq!(CLINIC.phone_link(), "tel:01303801712");
    }
}
