use crate::util::gradient::Gradient;
use crate::util::icon::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactMethod {
    pub icon: Icon,
    pub title: &'static str,
    pub value: &'static str,
    pub link: &'static str,
    pub accent: Gradient,
}

pub static METHODS: &[ContactMethod] = &[
    ContactMethod {
        icon: Icon::Mail,
        title: "Email",
        value: "ranjitkairi990@gmail.com",
        link: "mailto:ranjitkairi990@gmail.com",
        accent: Gradient::PurplePink,
    },
    ContactMethod {
        icon: Icon::Phone,
        title: "Phone",
        value: "+91 9127301592",
        link: "tel:+919127301592",
        accent: Gradient::BlueCyan,
    },
    ContactMethod {
        icon: Icon::MapPin,
        title: "Location",
        value: "Bangalore, India",
        link: "https://maps.google.com/maps?q=Bangalore",
        accent: Gradient::Blush,
    },
    ContactMethod {
        icon: Icon::Linkedin,
        title: "LinkedIn",
        value: "linkedin.com/in/ranjit-kairi",
        link: "https://linkedin.com/in/ranjit-kairi",
        accent: Gradient::Cobalt,
    },
    ContactMethod {
        icon: Icon::Github,
        title: "GitHub",
        value: "github.com/ranjitkairi",
        link: "https://github.com/ranjitkairi",
        accent: Gradient::Cobalt,
    },
];
