//! Numbered-list page: "five reasons" with an offer at the end. Sixteen
//! slots; fifteen blocks under pain and aspiration, sixteen under comparison.

use crate::application::generator::Angle;
use crate::application::generator::copy::{
    FaqCopy, RowCopy, Slot, SlotCopy, TestimonialCopy, slot, slot_only, tri, uni,
};

pub(crate) static SLOTS: &[Slot] = &[
    slot(SlotCopy::Headline {
        text: tri(
            "5 Reasons People Who Tried Everything Else Still Swear by {title}",
            "5 Reasons {title} Became the Upgrade People Recommend First",
            "5 Reasons Shoppers Keep Choosing {title} Over the Big-Name Alternatives",
        ),
        sub: Some(uni("Number four is the one readers mention most.")),
    }),
    slot(SlotCopy::AuthorByline {
        name: "Jules Tanaka",
        title: "Product Desk",
        date: "Updated this week",
    }),
    slot(SlotCopy::Text {
        heading: None,
        body: tri(
            "If your last few purchases left you underwhelmed, the list below is for you. No hype, just the five concrete things that make {title} different. {description}",
            "Some products earn a permanent spot in your routine. Here are the five reasons {title} keeps earning its place. {description}",
            "We lined {title} up against the usual recommendations and kept score. Five differences kept showing up, so we wrote them down. {description}",
        ),
    }),
    slot(SlotCopy::Numbered {
        number: 1,
        heading: tri(
            "It solves the actual problem, not a symptom",
            "It fits into the routine you already have",
            "It does more with a single product",
        ),
        body: tri(
            "Most alternatives treat the surface issue and call it a day. {title} was designed around the underlying cause, which is why the change lasts instead of resetting every week.",
            "No extra steps, no new habits to build. {title} replaces something you already do with a better version of it, so consistency is automatic.",
            "Where competing products expect you to buy two or three companions, {title} covers the full job on its own. Fewer items, fewer decisions, better result.",
        ),
        image_url: "https://placehold.co/640x360",
    }),
    slot(SlotCopy::Numbered {
        number: 2,
        heading: uni("The materials are a grade above the price"),
        body: uni(
            "Pick up {title} and the difference is obvious before you use it. The components are the kind normally reserved for products at twice the price, and the finish holds up to daily handling.",
        ),
        image_url: "",
    }),
    slot(SlotCopy::Numbered {
        number: 3,
        heading: tri(
            "Results show up on a calendar, not a someday",
            "The improvement compounds week over week",
            "Independent buyers rate it above the incumbents",
        ),
        body: tri(
            "Buyers consistently report the first visible change inside 30 days. That is a timeline you can hold it to, backed by a guarantee that outlasts it.",
            "Week one feels ordinary. Week four does not. Small daily gains are the entire design philosophy behind {title}, and they add up faster than you expect.",
            "Across verified review platforms, {title} holds a 4.8/5 average while the category's best-known names sit half a star lower. Ratings are not everything, but they are not nothing.",
        ),
        image_url: "",
    }),
    slot(SlotCopy::Numbered {
        number: 4,
        heading: uni("The guarantee removes the risk entirely"),
        body: uni(
            "Ninety days, full refund, shipping included, no questions asked. You can finish an entire season with {title} and still change your mind. Almost nobody does.",
        ),
        image_url: "",
    }),
    slot(SlotCopy::Numbered {
        number: 5,
        heading: tri(
            "It costs less than the pile of things it replaces",
            "It is the rare upgrade that pays for itself",
            "Head-to-head, the price-per-result is not close",
        ),
        body: tri(
            "Add up what you spent on partial fixes last year. {title} is one purchase that retires the whole pile, and the current price is below where it launched.",
            "One {title} replaces the two or three products you are topping up every month. Most buyers break even within the first quarter and keep the savings after that.",
            "Per month of use, {title} lands meaningfully cheaper than the leading alternative once you factor in the add-ons the alternative requires.",
        ),
        image_url: "",
    }),
    slot(SlotCopy::SocialProof {
        text: uni("24,000+ customers made the switch this year"),
        highlight: Some("★★★★★ 4.8/5 average verified rating"),
    }),
    slot_only(
        SlotCopy::Comparison {
            heading: uni("{title} versus the leading alternative"),
            us_label: "{title}",
            them_label: "Leading alternative",
            rows: &[
                RowCopy {
                    feature: "Visible results within 30 days",
                    us: "Yes",
                    them: "Sometimes",
                },
                RowCopy {
                    feature: "Works without add-on purchases",
                    us: "Yes",
                    them: "No",
                },
                RowCopy {
                    feature: "Guarantee window",
                    us: "90 days",
                    them: "30 days",
                },
                RowCopy {
                    feature: "Verified rating",
                    us: "4.8/5",
                    them: "4.3/5",
                },
            ],
        },
        Angle::Comparison,
    ),
    slot(SlotCopy::Testimonials {
        heading: uni("What switchers say"),
        entries: uni(&[
            TestimonialCopy {
                quote: "Number four sold me. Tried it, kept it, told three friends.",
                name: "Ana G.",
                detail: "Verified buyer",
            },
            TestimonialCopy {
                quote: "I came for the list, stayed for the product. It genuinely replaced two things on my shelf.",
                name: "Rob F.",
                detail: "Verified buyer",
            },
        ]),
    }),
    slot(SlotCopy::Guarantee {
        heading: "90-Day Money-Back Guarantee",
        body: uni(
            "Order {title}, use it for three full months, and if you are not convinced, send it back for every dollar, shipping included.",
        ),
        badge: "Risk-free",
    }),
    slot(SlotCopy::OfferBox {
        heading: uni("Today's {title} offer"),
        body: Some(tri(
            "Stop paying for partial fixes. The current price holds while stock does.",
            "The simplest upgrade on this list, at its best price of the season.",
            "Switch today and the price difference is covered in the first month.",
        )),
        price: "$39",
        original_price: "$59",
        button: uni("Claim This Offer"),
        badge: "Save 33%",
    }),
    slot(SlotCopy::Cta {
        heading: Some(uni("Ready to see reason four for yourself?")),
        button: uni("Check Availability"),
        sub: Some(uni("Free shipping. 90-day guarantee on every order.")),
    }),
    slot(SlotCopy::Faq {
        heading: "Before you order",
        items: uni(&[
            FaqCopy {
                question: "Does the guarantee really cover opened products?",
                answer: "Yes. Use {title} daily for up to 90 days and you can still return it for a full refund.",
            },
            FaqCopy {
                question: "How soon does it ship?",
                answer: "Orders placed before 2pm ship the same day and arrive in 3-5 business days.",
            },
            FaqCopy {
                question: "Is this the same {title} sold elsewhere?",
                answer: "It is the identical full-size product. Ordering here is simply the only place the bundle pricing applies.",
            },
        ]),
    }),
    slot(SlotCopy::Disclaimer),
];
