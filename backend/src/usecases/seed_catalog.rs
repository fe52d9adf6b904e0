//! Fixed catalogue loaded into an empty store at startup.

use sriyan_core::domain::{
    entities::{
        plans::InsertPlanEntity, server_nodes::InsertServerNodeEntity,
        staff::InsertStaffEntity, testimonials::InsertTestimonialEntity,
    },
    value_objects::enums::plan_types::PlanType,
};

const CURRENCY: &str = "₹";
const PERIOD: &str = "mo";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn plan(
    name: &str,
    description: &str,
    price: f64,
    plan_type: PlanType,
    features: &[&str],
    is_popular: bool,
    is_coming_soon: bool,
) -> InsertPlanEntity {
    InsertPlanEntity {
        name: name.to_string(),
        description: description.to_string(),
        price,
        currency: CURRENCY.to_string(),
        period: PERIOD.to_string(),
        plan_type,
        features: strings(features),
        is_popular,
        is_coming_soon,
    }
}

fn member(name: &str, position: &str, bio: &str, skills: &[&str], is_staff_of_month: bool) -> InsertStaffEntity {
    InsertStaffEntity {
        name: name.to_string(),
        position: position.to_string(),
        bio: bio.to_string(),
        avatar: None,
        skills: strings(skills),
        is_staff_of_month,
    }
}

fn testimonial(
    quote: &str,
    author_name: &str,
    author_position: &str,
    author_company: &str,
    rating: i32,
) -> InsertTestimonialEntity {
    InsertTestimonialEntity {
        quote: quote.to_string(),
        author_name: author_name.to_string(),
        author_position: author_position.to_string(),
        author_company: author_company.to_string(),
        author_image: None,
        rating,
    }
}

fn node(name: &str, cpu_load: i32, memory_usage: i32, network_usage: i32) -> InsertServerNodeEntity {
    InsertServerNodeEntity {
        name: name.to_string(),
        is_operational: true,
        cpu_load,
        memory_usage,
        network_usage,
    }
}

/// Three tiers for each product line.
pub fn plans() -> Vec<InsertPlanEntity> {
    vec![
        plan(
            "Standard Minecraft",
            "Basic Minecraft server for small communities with essential plugins.",
            799.0,
            PlanType::Minecraft,
            &["2GB RAM", "10 Player Slots", "Basic Plugins", "Daily Backups", "DDoS Protection"],
            false,
            false,
        ),
        plan(
            "Pro Minecraft",
            "Enhanced Minecraft server with more resources and premium plugins.",
            1599.0,
            PlanType::Minecraft,
            &["4GB RAM", "50 Player Slots", "Premium Plugins", "Hourly Backups", "DDoS Protection", "Custom Domain"],
            true,
            false,
        ),
        plan(
            "Enterprise Minecraft",
            "High-performance Minecraft server for large communities.",
            3199.0,
            PlanType::Minecraft,
            &["8GB RAM", "Unlimited Player Slots", "All Plugins", "Real-time Backups", "DDoS Protection", "Custom Domain", "Priority Support"],
            false,
            false,
        ),
        plan(
            "Basic VPS",
            "Entry-level VPS for personal projects and development.",
            499.0,
            PlanType::Vps,
            &["1 vCPU", "2GB RAM", "20GB SSD", "1TB Bandwidth", "Full Root Access", "Linux OS"],
            false,
            false,
        ),
        plan(
            "Standard VPS",
            "Balanced VPS for websites and small applications.",
            999.0,
            PlanType::Vps,
            &["2 vCPU", "4GB RAM", "50GB SSD", "2TB Bandwidth", "Full Root Access", "Linux/Windows OS"],
            true,
            false,
        ),
        plan(
            "Performance VPS",
            "High-performance VPS for demanding applications.",
            2499.0,
            PlanType::Vps,
            &["4 vCPU", "8GB RAM", "100GB SSD", "Unlimited Bandwidth", "Full Root Access", "Linux/Windows OS", "DDOS Protection"],
            true,
            false,
        ),
        plan(
            "Basic Discord Bot",
            "Entry-level hosting for simple Discord bots.",
            299.0,
            PlanType::DiscordBot,
            &["512MB RAM", "24/7 Uptime", "Auto-Restart", "Basic Monitoring", "Discord.js Support"],
            false,
            false,
        ),
        plan(
            "Standard Discord Bot",
            "Reliable hosting for medium-sized Discord bots.",
            599.0,
            PlanType::DiscordBot,
            &["1GB RAM", "24/7 Uptime", "Auto-Restart", "Advanced Monitoring", "Multiple Frameworks Support", "Database Integration"],
            true,
            false,
        ),
        plan(
            "Pro Discord Bot",
            "Professional hosting for complex Discord bots.",
            1199.0,
            PlanType::DiscordBot,
            &["2GB RAM", "24/7 Uptime", "Auto-Restart", "Premium Monitoring", "All Frameworks Support", "Database Integration", "Custom Domain", "Priority Support"],
            true,
            false,
        ),
        plan(
            "Basic Web Hosting",
            "Simple web hosting for personal websites.",
            399.0,
            PlanType::WebHosting,
            &["1 Website", "10GB SSD Storage", "Unmetered Bandwidth", "Free SSL Certificate", "1-Click WordPress Install"],
            false,
            true,
        ),
        plan(
            "Professional Web Hosting",
            "Advanced web hosting for business websites.",
            799.0,
            PlanType::WebHosting,
            &["Unlimited Websites", "25GB SSD Storage", "Unmetered Bandwidth", "Free SSL Certificate", "1-Click WordPress Install", "Free Domain for 1 Year"],
            true,
            true,
        ),
        plan(
            "Enterprise Web Hosting",
            "Premium web hosting for high-traffic websites.",
            1599.0,
            PlanType::WebHosting,
            &["Unlimited Websites", "100GB SSD Storage", "Unmetered Bandwidth", "Free SSL Certificate", "1-Click WordPress Install", "Free Domain for 1 Year", "Free CDN", "Priority Support"],
            false,
            true,
        ),
    ]
}

/// Exactly one member is flagged as staff of the month.
pub fn staff() -> Vec<InsertStaffEntity> {
    vec![
        member(
            "Sayan",
            "Founder",
            "Leading the vision and direction of SriyanNodes.",
            &["Leadership", "Business Strategy", "Technology"],
            false,
        ),
        member(
            "Ace",
            "Co Founder",
            "Co-leading SriyanNodes with expertise in operations.",
            &["Operations", "Management", "Strategy"],
            false,
        ),
        member(
            "M1nx",
            "Co Founder",
            "Co-leading SriyanNodes with focus on technical innovation.",
            &["Technical Leadership", "Innovation", "Development"],
            false,
        ),
        member(
            "Aura",
            "Chief Of Staff",
            "Managing staff operations and coordination.",
            &["Team Management", "Operations", "Leadership"],
            false,
        ),
        member(
            "Div",
            "System Administrator",
            "Managing and maintaining system infrastructure.",
            &["System Administration", "Infrastructure", "DevOps"],
            true,
        ),
        member(
            "Alex Mitchell",
            "Lead System Administrator",
            "Alex has led our infrastructure team for over 5 years, optimizing our server performance and implementing cutting-edge security protocols. Their expertise in cloud architecture has been instrumental in achieving our 99.9% uptime guarantee.",
            &["Cloud Infrastructure", "Security", "Performance Optimization"],
            false,
        ),
        member(
            "Samantha Lee",
            "Customer Support Manager",
            "Leading our 24/7 support team to ensure all customer inquiries are handled promptly and professionally.",
            &["Customer Service", "Technical Support", "Team Management"],
            false,
        ),
        member(
            "Marcus Johnson",
            "Network Engineer",
            "Specializes in optimizing network performance and implementing advanced security protocols.",
            &["Networking", "Security", "Infrastructure"],
            false,
        ),
        member(
            "Elena Rodriguez",
            "Game Server Specialist",
            "Expert in optimizing game servers for maximum performance and minimal latency across all platforms.",
            &["Game Hosting", "Server Optimization", "Minecraft", "Game Mods"],
            false,
        ),
        member(
            "David Chen",
            "Lead Developer",
            "Full-stack developer with expertise in creating custom solutions for our hosting platform.",
            &["Node.js", "React", "DevOps", "Database Design"],
            false,
        ),
        member(
            "Priya Patel",
            "Chief Technology Officer",
            "Oversees all technical aspects of the company and drives innovation in our hosting solutions.",
            &["Strategic Planning", "Technology Leadership", "Cloud Architecture"],
            false,
        ),
    ]
}

pub fn testimonials() -> Vec<InsertTestimonialEntity> {
    vec![
        testimonial(
            "Sriyan Nodes has been a game-changer for our business. The performance is outstanding, and the customer support team is always responsive and helpful. We've never experienced any significant downtime.",
            "Amit Sharma",
            "CTO",
            "TechStart",
            5,
        ),
        testimonial(
            "We migrated from another provider, and the difference is night and day. The servers are lightning fast, and the control panel is intuitive. Best hosting decision we've made.",
            "Priya Patel",
            "Developer",
            "DesignCraft",
            5,
        ),
        testimonial(
            "As a startup, finding reliable and affordable hosting was crucial. Sriyan Nodes exceeded our expectations with their Pro plan. The performance is exceptional, and scaling is a breeze.",
            "Rahul Gupta",
            "Founder",
            "CloudGear",
            5,
        ),
        testimonial(
            "The Minecraft server hosting is top-notch. Our gaming community has grown significantly since we switched to Sriyan Nodes due to the server's reliability and performance.",
            "James Wilson",
            "Community Manager",
            "BlockCraft Gaming",
            5,
        ),
        testimonial(
            "Our Discord bot has never run so smoothly. The automatic restart feature saved us countless headaches, and the support team is incredibly knowledgeable.",
            "Sophia Martinez",
            "Bot Developer",
            "BotHouse",
            4,
        ),
    ]
}

pub fn server_nodes() -> Vec<InsertServerNodeEntity> {
    vec![
        node("Mumbai Node", 28, 45, 18),
        node("Delhi Node", 32, 52, 24),
        node("Bangalore Node", 41, 38, 33),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_plans_per_type() {
        let plans = plans();
        assert_eq!(plans.len(), 12);
        for plan_type in PlanType::ALL {
            assert_eq!(
                plans.iter().filter(|plan| plan.plan_type == plan_type).count(),
                3
            );
        }
    }

    #[test]
    fn single_staff_of_month() {
        let flagged: Vec<String> = staff()
            .into_iter()
            .filter(|member| member.is_staff_of_month)
            .map(|member| member.name)
            .collect();
        assert_eq!(flagged, vec!["Div".to_string()]);
    }

    #[test]
    fn only_web_hosting_is_coming_soon() {
        for plan in plans() {
            assert_eq!(plan.is_coming_soon, plan.plan_type == PlanType::WebHosting);
        }
    }

    #[test]
    fn three_server_nodes() {
        let names: Vec<String> = server_nodes().into_iter().map(|node| node.name).collect();
        assert_eq!(names, vec!["Mumbai Node", "Delhi Node", "Bangalore Node"]);
    }
}
