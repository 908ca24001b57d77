//! Magazine-style editorial review. Fifteen slots; fourteen blocks under pain
//! and aspiration, fifteen under comparison.

use crate::application::generator::Angle;
use crate::application::generator::copy::{
    FaqCopy, FeatureCopy, RowCopy, Slot, SlotCopy, TestimonialCopy, slot, slot_only, tri, uni,
};

pub(crate) static SLOTS: &[Slot] = &[
    slot(SlotCopy::Headline {
        text: tri(
            "We Review Products for a Living. {title} Is the One We Kept Using After the Deadline",
            "The Quiet Rise of {title}: Why This Year's Most Recommended Upgrade Is Also the Simplest",
            "{title} Review: How It Stacks Up Against the Category's Biggest Names",
        ),
        sub: Some(uni("An independent editorial review.")),
    }),
    slot(SlotCopy::AuthorByline {
        name: "Imogen Clarke",
        title: "Senior Reviews Editor",
        date: "Updated this week",
    }),
    slot(SlotCopy::AsSeenIn {
        outlets: &["Daily Health", "Modern Living", "The Morning Edit", "Consumer Weekly"],
    }),
    slot(SlotCopy::Image {
        url: "https://placehold.co/800x450",
        alt: uni("{title} on the review bench"),
        caption: Some(uni("Our review unit of {title} after six weeks of daily testing.")),
    }),
    slot(SlotCopy::Text {
        heading: None,
        body: tri(
            "Most products that cross our bench promise to fix a frustration and quietly fail to. Once in a while one does the opposite: underpromises, overdelivers, and ends up in an editor's personal rotation. {title} is in that second group. {description}",
            "Every so often a product earns a rare distinction around here: the review ends and nobody returns the unit. {title} managed it inside a month. {description}",
            "The category {title} competes in is crowded with household names, which makes its review scores all the more interesting. We tested it against the three best-selling alternatives. {description}",
        ),
    }),
    slot(SlotCopy::Text {
        heading: Some(uni("How it performed")),
        body: tri(
            "We scored it on the things readers complain about most: time to results, daily effort, and whether the improvement survives week four. It cleared all three bars, which is rarer than it should be.",
            "Six weeks of structured testing, three reviewers, one conclusion: the gains are modest at first and unmistakable by the end. The design rewards consistency rather than demanding it.",
            "On our standard scorecard it beat the incumbent in four categories of five and tied the fifth. The gap was widest exactly where buyers care most: results per minute of daily effort.",
        ),
    }),
    slot(SlotCopy::ProsCons {
        heading: Some(uni("The scorecard")),
        pros: &[
            "Visible results on a 30-day timeline",
            "Under two minutes of daily effort",
            "Materials above its price class",
            "90-day guarantee, shipping included",
        ],
        cons: &[
            "Only sold online",
            "Popular sizes sell out periodically",
        ],
    }),
    slot_only(
        SlotCopy::Comparison {
            heading: uni("{title} versus the best-known names"),
            us_label: "{title}",
            them_label: "Category leaders",
            rows: &[
                RowCopy {
                    feature: "Our overall score",
                    us: "9.1/10",
                    them: "7.8/10",
                },
                RowCopy {
                    feature: "Daily effort required",
                    us: "Under 2 minutes",
                    them: "5-12 minutes",
                },
                RowCopy {
                    feature: "Guarantee",
                    us: "90 days",
                    them: "30 days or none",
                },
            ],
        },
        Angle::Comparison,
    ),
    slot(SlotCopy::Note {
        heading: "Disclosure",
        body: uni(
            "Our reviews are reader-supported. If you buy through links on this page we may earn a commission, which never influences scores.",
        ),
    }),
    slot(SlotCopy::Testimonials {
        heading: uni("What readers told us after buying"),
        entries: uni(&[
            TestimonialCopy {
                quote: "Bought it on this review's recommendation. It is the rare case where the hype undersold it.",
                name: "Lena P.",
                detail: "Reader, verified purchase",
            },
            TestimonialCopy {
                quote: "The two-minute claim is real. That is what keeps me using it.",
                name: "Owen D.",
                detail: "Reader, verified purchase",
            },
        ]),
    }),
    slot(SlotCopy::FeatureList {
        heading: uni("What stood out in testing"),
        features: uni(&[
            FeatureCopy {
                title: "Thoughtful design",
                text: "Every part of {title} earns its place; nothing is ornamental.",
            },
            FeatureCopy {
                title: "Honest instructions",
                text: "The quoted timeline matches what we measured.",
            },
            FeatureCopy {
                title: "Strong guarantee",
                text: "Ninety days is triple the category norm.",
            },
        ]),
    }),
    slot(SlotCopy::Guarantee {
        heading: "90-Day Money-Back Guarantee",
        body: uni(
            "Every order of {title} carries a 90-day, no-questions refund window, which removes the main reason to hesitate.",
        ),
        badge: "Editor verified",
    }),
    slot(SlotCopy::Cta {
        heading: Some(tri(
            "If the frustration sounds familiar, this is the fix we recommend",
            "Our verdict: the easiest upgrade we tested this year",
            "Our verdict: it beats the big names where it counts",
        )),
        button: uni("See Current Price"),
        sub: Some(uni("Availability and bundle pricing update daily.")),
    }),
    slot(SlotCopy::Faq {
        heading: "Reader questions",
        items: uni(&[
            FaqCopy {
                question: "Did you test the same unit customers receive?",
                answer: "Yes. We purchased {title} at retail, unannounced, exactly as any reader would.",
            },
            FaqCopy {
                question: "How long did you test before scoring?",
                answer: "Six weeks of daily use across three reviewers before the final scorecard.",
            },
        ]),
    }),
    slot(SlotCopy::Disclaimer),
];
