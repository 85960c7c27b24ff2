/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Copy and static lists rendered by the landing page.

use crate::icons::Icon;
use crate::motion::section::Section;

pub const PRODUCT_NAME: &str = "Ekklesia";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub target: Section,
}

impl NavItem {
    pub fn href(&self) -> String {
        self.target.anchor()
    }
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        name: "Home",
        target: Section::Home,
    },
    NavItem {
        name: "Features",
        target: Section::Features,
    },
    NavItem {
        name: "Testimonials",
        target: Section::Testimonials,
    },
    NavItem {
        name: "Pricing",
        target: Section::Pricing,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

pub const FEATURES: [Feature; 10] = [
    Feature {
        icon: Icon::Users,
        title: "Member Management",
        description: "Manage profiles, track attendance, and organize groups effortlessly.",
    },
    Feature {
        icon: Icon::Calendar,
        title: "Event Management",
        description: "Schedule events, coordinate volunteers, and manage RSVPs seamlessly.",
    },
    Feature {
        icon: Icon::CreditCard,
        title: "Donations & Payments",
        description: "Process online donations, manage pledges, and generate financial reports.",
    },
    Feature {
        icon: Icon::MessageCircle,
        title: "Communication Tools",
        description: "Send announcements, newsletters, and facilitate group chats easily.",
    },
    Feature {
        icon: Icon::Video,
        title: "Sermon Management",
        description: "Stream live services, archive media, and share devotionals effortlessly.",
    },
    Feature {
        icon: Icon::Globe,
        title: "Custom Microsites",
        description: "Create branded websites for individual churches with customizable themes.",
    },
    Feature {
        icon: Icon::FileText,
        title: "Custom Web Forms",
        description:
            "Create and manage custom forms for registrations, surveys, and data collection.",
    },
    Feature {
        icon: Icon::BarChart,
        title: "Analytics Dashboard",
        description: "Gain insights into church growth, engagement, and financial trends.",
    },
    Feature {
        icon: Icon::Shield,
        title: "Security & Compliance",
        description: "Ensure data protection and maintain compliance with privacy regulations.",
    },
    Feature {
        icon: Icon::Smartphone,
        title: "Mobile App Integration",
        description: "Extend church connectivity with a custom mobile app for members.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub church: &'static str,
    pub quote: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        church: "First Baptist Church",
        quote: "Ekklesia has revolutionized how we manage our congregation. It's user-friendly and comprehensive!",
    },
    Testimonial {
        church: "Grace Community Church",
        quote: "The event management feature has made coordinating our activities so much easier. Highly recommended!",
    },
    Testimonial {
        church: "St. Mary's Catholic Church",
        quote: "We've seen a significant increase in online donations since using Ekklesia. It's been a game-changer!",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingPlan {
    pub title: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
}

impl PricingPlan {
    /// Custom-priced tiers go through sales.
    pub fn call_to_action(&self) -> &'static str {
        if self.title == "Enterprise" {
            "Contact Us"
        } else {
            "Get Started"
        }
    }
}

pub const PRICING_PLANS: [PricingPlan; 3] = [
    PricingPlan {
        title: "Basic",
        price: "$49/mo",
        features: &["Up to 200 members", "Core features included", "Email support"],
    },
    PricingPlan {
        title: "Pro",
        price: "$99/mo",
        features: &["Up to 1000 members", "All features included", "Priority support"],
    },
    PricingPlan {
        title: "Enterprise",
        price: "Custom",
        features: &["Unlimited members", "Custom features", "24/7 support"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn nav_items_cover_every_section_in_order() {
        let targets: Vec<Section> = NAV_ITEMS.iter().map(|item| item.target).collect();
        assert_eq!(targets, Section::ALL.to_vec());
        for item in NAV_ITEMS.iter() {
            // Link labels double as the section names they highlight.
            assert_eq!(item.name.to_lowercase(), item.target.id());
            assert_eq!(item.href(), format!("#{}", item.target.id()));
        }
    }

    #[test]
    fn card_titles_are_unique() {
        let features: HashSet<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(features.len(), FEATURES.len());
        let churches: HashSet<_> = TESTIMONIALS.iter().map(|t| t.church).collect();
        assert_eq!(churches.len(), TESTIMONIALS.len());
    }

    #[test]
    fn only_enterprise_contacts_sales() {
        let labels: Vec<_> = PRICING_PLANS.iter().map(|p| p.call_to_action()).collect();
        assert_eq!(labels, vec!["Get Started", "Get Started", "Contact Us"]);
        assert!(PRICING_PLANS.iter().all(|p| p.features.len() == 3));
    }
}
