//! Copy, link tables and asset lists for every page.

use crate::animation::typewriter::Phrase;
use crate::Route;

/// One of the four sites served from this app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Site {
    Home,
    Innovate,
    Educate,
    Elevate,
}

impl Site {
    pub fn of(route: &Route) -> Self {
        match route {
            Route::Innovate => Site::Innovate,
            Route::Educate => Site::Educate,
            Route::Elevate => Site::Elevate,
            Route::Home | Route::EducateGallery | Route::NotFound => Site::Home,
        }
    }

    pub fn route(self) -> Route {
        match self {
            Site::Home => Route::Home,
            Site::Innovate => Route::Innovate,
            Site::Educate => Route::Educate,
            Site::Elevate => Route::Elevate,
        }
    }

    pub fn menu(self) -> &'static [MenuLink] {
        match self {
            Site::Home => HOME_MENU,
            Site::Innovate => INNOVATE_MENU,
            Site::Educate => EDUCATE_MENU,
            Site::Elevate => ELEVATE_MENU,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    /// A section id on the page that owns the link list.
    Anchor(&'static str),
    /// The top of another page.
    Page(Site),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuLink {
    pub name: &'static str,
    pub target: LinkTarget,
}

const fn anchor(name: &'static str, id: &'static str) -> MenuLink {
    MenuLink { name, target: LinkTarget::Anchor(id) }
}

const HOME_LINK: MenuLink = MenuLink { name: "Home", target: LinkTarget::Page(Site::Home) };

pub const HOME_MENU: &[MenuLink] = &[
    anchor("Home", "home"),
    anchor("Our Division", "about"),
    anchor("Vision & Mission", "vision"),
    anchor("Our Innovation", "innovation"),
    anchor("Contact", "contact"),
];

pub const INNOVATE_MENU: &[MenuLink] = &[
    HOME_LINK,
    anchor("About", "about"),
    anchor("Our Services", "services"),
    anchor("Our Technology", "tech"),
    anchor("Contact", "contact"),
];

pub const EDUCATE_MENU: &[MenuLink] = &[
    HOME_LINK,
    anchor("About", "about"),
    anchor("Our Division", "division"),
    anchor("Our Gallery", "gallery"),
    anchor("Contact", "contact"),
];

pub const ELEVATE_MENU: &[MenuLink] = &[
    HOME_LINK,
    anchor("About", "about"),
    anchor("Our Services", "services"),
    anchor("Contact", "contact"),
];

/// Where a link lands: a page, and optionally a section on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Destination {
    pub route: Route,
    pub anchor: Option<&'static str>,
}

impl MenuLink {
    /// Resolves the link as listed for `owner`.
    pub fn destination(&self, owner: Site) -> Destination {
        match self.target {
            LinkTarget::Anchor(id) => Destination { route: owner.route(), anchor: Some(id) },
            LinkTarget::Page(site) => Destination { route: site.route(), anchor: None },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// Already on the right page.
    Scroll(&'static str),
    /// Change page, then scroll once it has rendered.
    Push { route: Route, anchor: Option<&'static str> },
    Stay,
}

impl Destination {
    pub fn plan(&self, current: &Route) -> Navigation {
        match (self.route == *current, self.anchor) {
            (true, Some(id)) => Navigation::Scroll(id),
            (true, None) => Navigation::Stay,
            (false, anchor) => Navigation::Push { route: self.route.clone(), anchor },
        }
    }
}

pub const TYPED_PHRASES: &[Phrase] = &[
    Phrase { prefix: "An Eco System to ", word: "INNOVATE", class: "typed-innovate" },
    Phrase { prefix: "An Eco System to ", word: "EDUCATE", class: "typed-educate" },
    Phrase { prefix: "An Eco System to ", word: "ELEVATE", class: "typed-elevate" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
}

impl SocialLink {
    pub fn icon(&self) -> String {
        format!("/social/{}.svg", self.name)
    }
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { name: "linkedin", href: "#" },
    SocialLink { name: "github", href: "#" },
    SocialLink { name: "instagram", href: "#" },
    SocialLink { name: "facebook", href: "#" },
    SocialLink { name: "twitter", href: "#" },
];

/// Two sentences that light up in turn as the about section scrolls by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AboutQuotes {
    pub first: &'static str,
    pub second: &'static str,
}

pub const HOME_ABOUT: AboutQuotes = AboutQuotes {
    first: "Durkkas Innovations Pvt.Ltd. stands as a holistic innovation ecosystem, bridging technology, learning and enterprise growth.",
    second: "DIPL's mission and vision drive its commitment to transform industries, empower communities and create a future-ready digital society.",
};

pub const INNOVATE_ABOUT: AboutQuotes = AboutQuotes {
    first: "Durkkas INNOVATE is the technology engine of DIPL, driving intelligent solutions, digital transformation and innovation-led growth across all divisions.",
    second: "It empowers businesses with smart systems, automation and modern development that shape a future-ready digital ecosystem.",
};

pub const EDUCATE_ABOUT: AboutQuotes = AboutQuotes {
    first: "Durkkas EDUCATE is the learning arm of DIPL, bringing technology-integrated education, research and career guidance to students and professionals.",
    second: "It empowers learners with future-ready skills, mentorship and industry collaborations that open the way to meaningful careers.",
};

pub const ELEVATE_ABOUT: AboutQuotes = AboutQuotes {
    first: "Durkkas ELEVATE is the operational backbone of DIPL, delivering reliable backoffice support, compliance services and process-driven business solutions across all divisions.",
    second: "It empowers enterprises with streamlined operations, professional staffing and efficient administrative systems that enable sustainable growth and long-term business stability.",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Division {
    pub name: &'static str,
    pub description: &'static str,
    pub purpose: &'static str,
    pub image: &'static str,
    pub gradient: (&'static str, &'static str),
    pub site: Site,
}

pub const DIVISIONS: &[Division] = &[
    Division {
        name: "INNOVATE",
        description: "Technology, Digital Solutions & Automation Division",
        purpose: "To drive business and digital transformation through innovative technology services.",
        image: "/projects/innovate.jpg",
        gradient: ("#1F6582", "#1ABCFE"),
        site: Site::Innovate,
    },
    Division {
        name: "EDUCATE",
        description: "Education, Research & Career Development Division",
        purpose: "To empower learners and professionals through tech-integrated education and guided career growth.",
        image: "/projects/educate.png",
        gradient: ("#153BB9", "#0E2C8B"),
        site: Site::Educate,
    },
    Division {
        name: "ELEVATE",
        description: "Business Consulting & Remote Staffing Division",
        purpose: "To empower businesses with strategic consulting, efficient remote staffing, and operational excellence that drives sustainable growth.",
        image: "/projects/elevate.jpg",
        gradient: ("#245B57", "#004741"),
        site: Site::Elevate,
    },
];

pub fn division(site: Site) -> Option<&'static Division> {
    DIVISIONS.iter().find(|d| d.site == site)
}

pub const VISION: &str = "To become a leading innovation-driven ecosystem that bridges technology, education and enterprise services, empowering society through digital transformation, continuous learning and sustainable growth.";

pub const VISION_PATHWAYS: &[&str] = &[
    "Integrate all Durkkas divisions into a digitally unified ecosystem",
    "Lead the region's transformation in AI education, automation and business innovation",
    "Create career-ready individuals through EDUKOOT's mentorship and training programs",
    "Build long-term industry collaborations with partners like STEMpedia, AICRA and ISML",
    "Establish DIPL as a model for sustainable, tech-enabled corporate growth",
];

pub const MISSION: &str = "To empower individuals, institutions and enterprises through innovative technology, transformative education and sustainable business solutions, creating a connected ecosystem that drives growth, knowledge and digital excellence.";

pub const MISSION_FOCUS: &[&str] = &[
    "Empower Individuals through education, skill development, and career guidance under DARE Centre and EDUKOOT",
    "Enable Institutions with scalable technology, automation, and learning management systems through Durkkas InfoTech",
    "Support Enterprises with compliance, staffing, and process efficiency through Durkkas Associates",
    "Foster Innovation by developing proprietary frameworks like the Durkkas Business Framework (DBF) for research and consultancy",
    "Promote Collaboration by building a unified digital ecosystem that connects education, technology, and business operations seamlessly",
];

/// One step of the Durkkas Business Framework, spelling out the name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameworkStep {
    pub letter: char,
    pub title: &'static str,
    pub summary: &'static str,
    pub image: &'static str,
}

pub const FRAMEWORK: &[FrameworkStep] = &[
    FrameworkStep { letter: 'D', title: "Data", summary: "Collect, organize, and prepare business, customer and market data.", image: "/timeline/data.jpg" },
    FrameworkStep { letter: 'U', title: "Understand", summary: "Analyze trends, customer segments and predictive insights.", image: "/timeline/understand.jpg" },
    FrameworkStep { letter: 'R', title: "Recommend", summary: "Design intelligent, personalized offers and decisions.", image: "/timeline/recommand.jpg" },
    FrameworkStep { letter: 'K', title: "Keep", summary: "Retain customers, reduce churn and build loyalty.", image: "/timeline/keep.jpg" },
    FrameworkStep { letter: 'K', title: "KPI Tracking", summary: "Measure what matters using AI-driven dashboards.", image: "/timeline/kpi.jpg" },
    FrameworkStep { letter: 'A', title: "Automate", summary: "Streamline workflows, cut costs and save time.", image: "/timeline/automate.jpg" },
    FrameworkStep { letter: 'S', title: "Scale", summary: "Expand into new markets, channels and geographies seamlessly.", image: "/timeline/scale.jpg" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

pub const INNOVATE_SERVICES: &[Service] = &[
    Service {
        title: "Automation",
        description: "Streamline your business processes with intelligent automation solutions that reduce manual work and increase efficiency. We help businesses eliminate repetitive manual tasks through smart automation powered by AI and process engineering. Our solutions streamline workflows across operations, finance, HR, sales and support, resulting in faster turnaround, fewer errors, and reduced operational costs. From rule-based systems to intelligent decision automation, we design end-to-end automated workflows that integrate smoothly with your existing tools and scale with your business growth.",
    },
    Service {
        title: "AI Application",
        description: "We build advanced AI solutions that transform raw data into real business intelligence. Our expertise covers predictive analytics, NLP chatbots, recommendation engines, computer vision and autonomous decision systems. Each application is designed to enhance customer experience, optimize operations and unlock new strategic opportunities. With the DURKKAS Business Framework, our AI solutions follow a structured lifecycle, Data → Understand → Recommend → Keep → KPI tracking, to ensure measurable results.",
    },
    Service {
        title: "SaaS Development",
        description: "We specialize in developing scalable SaaS platforms tailored to modern businesses. From concept design and UI/UX to multi-tenant architecture, cloud deployment, subscription management, analytics and continuous updates, our team builds SaaS products that are secure, reliable and future-proof. Whether it's a niche productivity tool or a large enterprise platform, we deliver SaaS solutions capable of serving global users with high performance and seamless experience.",
    },
    Service {
        title: "Custom Software",
        description: "Every business is unique, and we create software that reflects that. Our custom development services include ERP systems, CRM tools, workflow automation platforms, learning management systems, mobile apps and enterprise dashboards. We combine user-focused design with solid backend engineering to build solutions that solve real challenges, simplify complex processes, and drive long-term digital transformation.",
    },
    Service {
        title: "Digital Marketing",
        description: "We grow your brand using a full-spectrum digital marketing approach driven by data and strategy. Our services include SEO, social media marketing, performance ads, content creation, branding, and analytics. By integrating market insights with AI-powered tracking, we help you attract the right audience, strengthen your online presence, improve engagement, and generate consistent inbound leads, ensuring measurable ROI for every marketing effort.",
    },
];

pub const ELEVATE_SERVICES: &[Service] = &[
    Service {
        title: "Remote Business Associate",
        description: "Comprehensive remote business support covering Finance, Admin, Sales & Marketing, and HR Operations. Get dedicated professionals to handle your business functions remotely with efficiency and expertise.",
    },
    Service {
        title: "Accounting & Auditing",
        description: "Professional accounting and auditing services to maintain accurate financial records, ensure compliance, and provide insights for informed business decisions.",
    },
    Service {
        title: "Company Formation & Compliance",
        description: "Complete support for company formation, registration, and ongoing compliance management. Navigate legal requirements seamlessly with expert guidance.",
    },
    Service {
        title: "GST/ITR/TDS Compliance Filing Returns",
        description: "Expert tax compliance services including GST filing, Income Tax Returns (ITR), and TDS returns. Ensure timely and accurate filing to stay compliant with tax regulations.",
    },
    Service {
        title: "Payroll Service",
        description: "Comprehensive payroll management services including salary processing, statutory compliance, tax deductions, and employee record management for seamless HR operations.",
    },
];

pub const ELEVATE_LEARN_MORE: &str = "https://www.durkkas.in/";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct School {
    pub name: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 3],
}

pub const SCHOOLS: &[School] = &[
    School {
        name: "School of AI & Robotics",
        description: "School of AI & Robotics, teaming up with STEMpedia, is reinventing K-12 education by exposing children to cutting-edge technology such as AI, robots, and STEM. Our programs, tailored for students aged 7 to 18, are intended to build crucial 21st-century skills such as coding, computational thinking, and imaginative problem-solving.",
        features: [
            "21st century skills",
            "Activity Based Learning with DIY projects",
            "STEAM education methodology",
        ],
    },
    School {
        name: "School of Languages",
        description: "School of Languages provides exciting and effective language learning courses in Tamil, English, and Hindi. Additionally, we collaborate with the Indian School For Foreign Languages for French, German, and Japanese. Our dynamic and immersive learning methods are intended to improve speaking, writing, and listening abilities, ensuring overall competency.",
        features: [
            "Skill-Focused LSRW Course",
            "Interactive Learning with the Harkness Method",
            "Inclusive for All Learners",
        ],
    },
    School {
        name: "School of Business",
        description: "School of Business helps students develop essential entrepreneurial, managerial, and leadership skills for today's dynamic world. With practical learning and real case studies, we prepare learners to think strategically and excel in modern business environments.",
        features: [
            "21st Century Business Skills",
            "Hands-on Learning with Real Case Studies",
            "Entrepreneurship & Leadership Development",
        ],
    },
    School {
        name: "School of Finance",
        description: "School of Finance helps students build strong financial literacy and smart money-management skills. Through practical activities and simple real-life examples, learners understand budgeting, saving, investing, and financial planning with confidence.",
        features: [
            "Financial Literacy for Everyday Life",
            "Hands-on Budgeting & Investment Activities",
            "Builds Strong Analytical Skills",
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tech {
    pub name: &'static str,
    pub color: &'static str,
}

const fn tech(name: &'static str, color: &'static str) -> Tech {
    Tech { name, color }
}

pub const TECH_STACK: &[Tech] = &[
    tech("React", "#61DAFB"),
    tech("Next.js", "#000000"),
    tech("Node.js", "#339933"),
    tech("TypeScript", "#3178C6"),
    tech("JavaScript", "#F7DF1E"),
    tech("Python", "#3776AB"),
    tech("Java", "#ED8B00"),
    tech("HTML5", "#E34F26"),
    tech("CSS3", "#1572B6"),
    tech("Tailwind", "#06B6D4"),
    tech("Docker", "#2496ED"),
    tech("Kubernetes", "#326CE5"),
    tech("AWS", "#FF9900"),
    tech("MongoDB", "#47A248"),
    tech("PostgreSQL", "#4169E1"),
    tech("MySQL", "#4479A1"),
    tech("Redis", "#DC382D"),
    tech("GraphQL", "#E10098"),
    tech("Git", "#F05032"),
    tech("GitHub", "#181717"),
    tech("Google Analytics", "#FFC107"),
    tech("Google Ads", "#4285F4"),
    tech("Google Tag Manager", "#34A853"),
    tech("Google Search Console", "#EA4335"),
    tech("HubSpot", "#FF7A59"),
    tech("Mailchimp", "#FFE01B"),
    tech("Salesforce", "#00A1E0"),
    tech("Adobe", "#FF0000"),
    tech("SEMrush", "#FF652F"),
];

/// Copy for a collaboration band: two sliding lines around a call to
/// action.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Collaboration {
    pub leading: &'static str,
    pub call: &'static str,
    pub trailing: &'static str,
    pub period_ms: f64,
}

pub const HOME_COLLABORATION: Collaboration = Collaboration {
    leading: "We build smart technology solutions for seamless digital transformation.",
    call: "Ready to Grow with",
    trailing: "Innovating Technology, Transforming Education, Empowering Businesses.",
    period_ms: 40_000.0,
};

pub const INNOVATE_COLLABORATION: Collaboration = Collaboration {
    leading: "We innovate intelligent technology solutions that power seamless digital transformation.",
    call: "Ready to Innovate with",
    trailing: "Engineering Innovation, Accelerating Digital Growth, Empowering the Future.",
    period_ms: 10_000.0,
};

pub const EDUCATE_COLLABORATION: Collaboration = Collaboration {
    leading: "We educate future-ready minds through technology-integrated learning and mentorship.",
    call: "Ready to Learn with",
    trailing: "Inspiring Learners, Building Skills, Shaping Careers.",
    period_ms: 40_000.0,
};

pub const ELEVATE_COLLABORATION: Collaboration = Collaboration {
    leading: "We elevate businesses with reliable backoffice support, smart operations and streamlined compliance solutions.",
    call: "Ready to Elevate Your Business with",
    trailing: "Optimizing Processes, Strengthening Operations, Empowering Enterprise Growth.",
    period_ms: 40_000.0,
};

/// Gallery photos as they are named on disk.
pub fn gallery_images() -> Vec<String> {
    (1..=17)
        .map(|i| match i {
            1..=14 => format!("/gallery/{i}.JPG"),
            _ => format!("/gallery/{i}.jpeg"),
        })
        .collect()
}

pub const ADDRESS_LINES: &[&str] = &[
    "NO. 58/2, MDR NAGAR NORTH,",
    "CHOKKALINGAPURAM, ARUPPUKOTTAI,",
    "VIRUDHUNAGAR-626101, TAMILNADU",
];

pub const MAP_EMBED: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3934.9289154596004!2d78.10286547367897!3d9.51490568119652!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3b0130022d4768e3%3A0x4609380ecf6051b4!2sDurkkas%20Innovations%20Pvt.%20Ltd!5e0!3m2!1sen!2sin!4v1765529065181!5m2!1sen!2sin";

pub fn copyright(year: i32) -> String {
    format!("© {year} Durkkas Innovations Pvt. Ltd. All rights reserved.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_has_a_menu() {
        assert_eq!(Site::of(&Route::Home).menu(), HOME_MENU);
        assert_eq!(Site::of(&Route::Innovate).menu(), INNOVATE_MENU);
        assert_eq!(Site::of(&Route::Educate).menu(), EDUCATE_MENU);
        assert_eq!(Site::of(&Route::Elevate).menu(), ELEVATE_MENU);
        assert_eq!(Site::of(&Route::EducateGallery).menu(), HOME_MENU);
        assert_eq!(Site::of(&Route::NotFound).menu(), HOME_MENU);
    }

    #[test]
    fn division_menus_lead_back_home() {
        for site in [Site::Innovate, Site::Educate, Site::Elevate] {
            let first = site.menu()[0];
            assert_eq!(first.name, "Home");
            assert_eq!(
                first.destination(site),
                Destination { route: Route::Home, anchor: None }
            );
            assert!(site.menu().iter().skip(1).all(|l| matches!(l.target, LinkTarget::Anchor(_))));
        }
        assert!(HOME_MENU.iter().all(|l| matches!(l.target, LinkTarget::Anchor(_))));
    }

    #[test]
    fn footer_column_links_cross_pages() {
        let services = INNOVATE_MENU[2].destination(Site::Innovate);
        assert_eq!(services, Destination { route: Route::Innovate, anchor: Some("services") });

        assert_eq!(services.plan(&Route::Innovate), Navigation::Scroll("services"));
        assert_eq!(
            services.plan(&Route::Elevate),
            Navigation::Push { route: Route::Innovate, anchor: Some("services") }
        );

        let home = HOME_LINK.destination(Site::Educate);
        assert_eq!(home.plan(&Route::Home), Navigation::Stay);
        assert_eq!(home.plan(&Route::Educate), Navigation::Push { route: Route::Home, anchor: None });
    }

    #[test]
    fn gallery_lists_every_photo() {
        let images = gallery_images();
        assert_eq!(images.len(), 17);
        assert_eq!(images[0], "/gallery/1.JPG");
        assert_eq!(images[13], "/gallery/14.JPG");
        assert_eq!(images[14], "/gallery/15.jpeg");
        assert_eq!(images[16], "/gallery/17.jpeg");
    }

    #[test]
    fn divisions_cover_each_microsite() {
        assert_eq!(division(Site::Innovate).map(|d| d.name), Some("INNOVATE"));
        assert_eq!(division(Site::Educate).map(|d| d.gradient), Some(("#153BB9", "#0E2C8B")));
        assert_eq!(division(Site::Elevate).map(|d| d.site.route()), Some(Route::Elevate));
        assert!(division(Site::Home).is_none());
    }

    #[test]
    fn tech_stack_is_complete() {
        assert_eq!(TECH_STACK.len(), 29);
        assert!(TECH_STACK.iter().all(|t| t.color.starts_with('#') && t.color.len() == 7));
    }

    #[test]
    fn innovate_band_runs_faster() {
        assert_eq!(INNOVATE_COLLABORATION.period_ms, 10_000.0);
        for band in [HOME_COLLABORATION, EDUCATE_COLLABORATION, ELEVATE_COLLABORATION] {
            assert_eq!(band.period_ms, 40_000.0);
            assert_ne!(band, INNOVATE_COLLABORATION);
        }
    }

    #[test]
    fn copyright_uses_given_year() {
        assert_eq!(copyright(2026), "© 2026 Durkkas Innovations Pvt. Ltd. All rights reserved.");
    }
}
