//! Research-report framing: numbers first, story second. Fifteen slots;
//! fourteen blocks under pain and aspiration, fifteen under comparison.

use crate::application::generator::Angle;
use crate::application::generator::copy::{
    FeatureCopy, RowCopy, Slot, SlotCopy, StatCopy, StepCopy, TestimonialCopy, TierCopy, slot,
    slot_only, tri, uni,
};

pub(crate) static SLOTS: &[Slot] = &[
    slot(SlotCopy::Headline {
        text: tri(
            "New Survey: 93% of Frustrated Buyers Report a Difference After Switching to {title}",
            "The Data Behind {title}: What 1,200 Customers Reported After 90 Days",
            "Benchmark Report: {title} Outscores the Category Average in 4 of 5 Measures",
        ),
        sub: Some(uni("Findings from a 1,200-customer follow-up survey.")),
    }),
    slot(SlotCopy::AuthorByline {
        name: "Consumer Insights Desk",
        title: "Research Team",
        date: "Updated this quarter",
    }),
    slot(SlotCopy::Stats {
        heading: Some(uni("Headline findings")),
        entries: tri(
            &[
                StatCopy { value: "93%", label: "reported their original frustration improved" },
                StatCopy { value: "17 days", label: "median time to first noticed change" },
                StatCopy { value: "2.3", label: "products retired per customer after switching" },
            ],
            &[
                StatCopy { value: "96%", label: "would recommend {title} to a friend" },
                StatCopy { value: "4.8/5", label: "average satisfaction score at day 90" },
                StatCopy { value: "81%", label: "describe the routine as easier than before" },
            ],
            &[
                StatCopy { value: "4 of 5", label: "benchmark measures where {title} leads" },
                StatCopy { value: "+0.5", label: "rating gap over the leading alternative" },
                StatCopy { value: "33%", label: "lower cost per month of use" },
            ],
        ),
    }),
    slot(SlotCopy::Text {
        heading: Some(uni("Methodology")),
        body: uni(
            "We surveyed 1,200 verified {title} customers at 30, 60, and 90 days after purchase. Responses were anonymous and uncompensated. {description}",
        ),
    }),
    slot(SlotCopy::Image {
        url: "https://placehold.co/800x450",
        alt: uni("Chart of reported satisfaction with {title} over 90 days"),
        caption: Some(uni("Reported satisfaction climbs steadily through the guarantee window.")),
    }),
    slot(SlotCopy::Text {
        heading: Some(uni("What the numbers say")),
        body: tri(
            "The strongest signal in the data: buyers who described themselves as \"ready to give up\" at purchase reported the largest improvements. The product appears to perform best precisely where frustration is highest.",
            "Satisfaction does not spike and decay the way it does for most products we track; it climbs through day 90. That pattern is characteristic of products whose benefits compound with routine use.",
            "Against the category benchmark, {title} leads on results timeline, daily effort, guarantee strength, and cost per month. The single tie was packaging, which respondents ranked least important.",
        ),
    }),
    slot(SlotCopy::FeatureList {
        heading: uni("Factors respondents credited"),
        features: uni(&[
            FeatureCopy {
                title: "A routine that survives busy weeks",
                text: "Cited by 71% of respondents as the main reason results held.",
            },
            FeatureCopy {
                title: "Materials that do not degrade",
                text: "Week-twelve performance matched week one in our bench checks.",
            },
            FeatureCopy {
                title: "The 90-day guarantee",
                text: "Cited by 64% as the reason they were willing to try.",
            },
        ]),
    }),
    slot_only(
        SlotCopy::Comparison {
            heading: uni("Benchmark: {title} versus category average"),
            us_label: "{title}",
            them_label: "Category average",
            rows: &[
                RowCopy { feature: "Median time to first result", us: "17 days", them: "41 days" },
                RowCopy { feature: "Daily effort", us: "Under 2 minutes", them: "7 minutes" },
                RowCopy { feature: "Guarantee window", us: "90 days", them: "27 days" },
                RowCopy { feature: "Satisfaction at day 90", us: "4.8/5", them: "4.1/5" },
            ],
        },
        Angle::Comparison,
    ),
    slot(SlotCopy::Timeline {
        heading: uni("The reported timeline"),
        steps: uni(&[
            StepCopy { label: "Days 1-7", text: "Routine established; no visible change expected or reported." },
            StepCopy { label: "Days 8-21", text: "First changes reported by a majority of respondents." },
            StepCopy { label: "Days 22-60", text: "Improvement consolidates; most respondents retire older products." },
            StepCopy { label: "Days 61-90", text: "Reported satisfaction peaks inside the guarantee window." },
        ]),
    }),
    slot(SlotCopy::Testimonials {
        heading: uni("Respondent comments"),
        entries: uni(&[
            TestimonialCopy {
                quote: "I answered the 30-day survey with a shrug and the 90-day one with a thank-you note.",
                name: "Respondent #0412",
                detail: "Verified customer, day 90",
            },
            TestimonialCopy {
                quote: "The timeline in the report matches mine almost exactly. Day 16 was my turning point.",
                name: "Respondent #0977",
                detail: "Verified customer, day 60",
            },
        ]),
    }),
    slot(SlotCopy::Guarantee {
        heading: "90-Day Money-Back Guarantee",
        body: uni(
            "The guarantee window intentionally covers the full reported results timeline: if your experience does not match the data, return {title} for a complete refund.",
        ),
        badge: "Risk-free",
    }),
    slot(SlotCopy::PricingTiers {
        heading: uni("Current {title} pricing"),
        tiers: &[
            TierCopy {
                name: "Single",
                quantity: "1 unit",
                price: "$39",
                original_price: "",
                badge: "",
                button: "Select",
            },
            TierCopy {
                name: "Household",
                quantity: "3 units",
                price: "$89",
                original_price: "$117",
                badge: "Most chosen by respondents",
                button: "Select",
            },
            TierCopy {
                name: "Yearly supply",
                quantity: "6 units",
                price: "$149",
                original_price: "$234",
                badge: "Best value",
                button: "Select",
            },
        ],
    }),
    slot(SlotCopy::Cta {
        heading: Some(uni("Run your own 90-day experiment")),
        button: uni("Check Availability"),
        sub: Some(uni("Free shipping. The guarantee outlasts the results timeline.")),
    }),
    slot(SlotCopy::Note {
        heading: "About this report",
        body: uni(
            "Survey conducted among verified purchasers of {title}. Self-reported data; individual experiences vary.",
        ),
    }),
    slot(SlotCopy::Disclaimer),
];
