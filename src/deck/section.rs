//! Section definitions and the standard proposal deck.

/// A section's resolved vertical placement within the scrollable document.
///
/// Measured in terminal rows. Extents are resolved lazily: they depend on
/// the viewport height, which is only known after the first layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    /// Document row at which the section starts.
    pub top: f32,
    /// Height of the section in rows.
    pub height: f32,
}

impl Extent {
    /// Whether the given document row falls inside this extent.
    #[must_use]
    pub fn contains(&self, row: f32) -> bool {
        row >= self.top && row < self.top + self.height
    }

    /// Document row just past the end of the section.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// One navigable content region of the presentation.
///
/// The id is stable, unique within the deck, and order-significant: the
/// deck's ordering defines the navigation sequence.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    /// Stable identifier, e.g. `"hero"`.
    pub id: &'static str,
    /// Short label shown above the title.
    pub kicker: &'static str,
    /// Section headline.
    pub title: &'static str,
    /// Body lines.
    pub bullets: &'static [&'static str],
}

/// The standard fourteen-section agency proposal deck, in presentation order.
#[must_use]
pub fn standard_deck() -> Vec<Section> {
    vec![
        Section {
            id: "hero",
            kicker: "visorlab × skroler",
            title: "A premium website that proves impact",
            bullets: &[
                "A proposal for a site that earns attention and keeps it.",
                "Scroll, or press Down, to begin.",
            ],
        },
        Section {
            id: "requirements",
            kicker: "01",
            title: "What you asked for",
            bullets: &[
                "WordPress with reusable blocks and templates",
                "HubSpot forms, meeting booking, inquiry tracking",
                "Analytics wired in, with quarterly reporting",
                "End of Q1 delivery",
            ],
        },
        Section {
            id: "storytelling",
            kicker: "02",
            title: "Storytelling first",
            bullets: &[
                "Every page argues one idea, in order",
                "Copy and motion staged to the same rhythm",
                "Proof points where attention peaks",
            ],
        },
        Section {
            id: "process",
            kicker: "03",
            title: "Agile, with gates",
            bullets: &[
                "Short sprints, visible work",
                "A sign-off gate closes every phase",
                "No surprise scope, no silent drift",
            ],
        },
        Section {
            id: "structure",
            kicker: "04",
            title: "Structure that scales",
            bullets: &[
                "A sitemap built from your sales conversations",
                "Block library instead of one-off pages",
                "New landing pages without a developer",
            ],
        },
        Section {
            id: "premium",
            kicker: "05",
            title: "Premium by design",
            bullets: &[
                "A design system, not a theme",
                "Typography and color tuned to the brand",
                "Detail work where visitors actually look",
            ],
        },
        Section {
            id: "experience",
            kicker: "06",
            title: "An experience, not a brochure",
            bullets: &[
                "Scroll-reactive scenes behind the content",
                "Entrance animation as sections come into view",
                "Fast on every device; motion degrades gracefully",
            ],
        },
        Section {
            id: "adoption",
            kicker: "07",
            title: "Built for adoption",
            bullets: &[
                "Editors publish with blocks they already know",
                "Guardrails keep every page on-brand",
                "Training and a living style guide included",
            ],
        },
        Section {
            id: "seo-impact",
            kicker: "08",
            title: "SEO that compounds",
            bullets: &[
                "Technical SEO baked into the build",
                "Content modeled around search intent",
                "Core Web Vitals as an acceptance criterion",
            ],
        },
        Section {
            id: "measurable",
            kicker: "09",
            title: "Measurable from day one",
            bullets: &[
                "Events defined before launch, not after",
                "Dashboards your team will actually open",
                "Quarterly reviews against agreed KPIs",
            ],
        },
        Section {
            id: "delivery",
            kicker: "10",
            title: "Delivery: 12 weeks",
            bullets: &[
                "Weeks 1-2: discovery and architecture",
                "Weeks 3-8: design and build in parallel tracks",
                "Weeks 9-12: content, QA, launch",
            ],
        },
        Section {
            id: "about",
            kicker: "11",
            title: "Who we are",
            bullets: &[
                "A senior team, end to end",
                "Strategy, design, and engineering in one room",
                "We ship, then we stay",
            ],
        },
        Section {
            id: "investment",
            kicker: "12",
            title: "Investment",
            bullets: &[
                "Fixed price against the agreed scope",
                "Payment terms: 30% / 30% / 40%",
                "Delivery in 12 weeks with clear gates",
            ],
        },
        Section {
            id: "final-slide",
            kicker: "visorlab × skroler",
            title: "Let's build it",
            bullets: &[
                "Book the kickoff and we start next sprint.",
                "Press Q to leave the deck.",
            ],
        },
    ]
}
