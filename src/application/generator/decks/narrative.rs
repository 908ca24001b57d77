//! Long-form first-person narrative: a skeptic tries the product and is won
//! over. Seventeen slots; sixteen blocks under the pain and aspiration
//! angles, seventeen under comparison.

use crate::application::generator::Angle;
use crate::application::generator::copy::{
    CommentCopy, FaqCopy, FeatureCopy, RowCopy, Slot, SlotCopy, StatCopy, TestimonialCopy, slot,
    slot_only, tri, uni,
};

pub(crate) static SLOTS: &[Slot] = &[
    slot(SlotCopy::Headline {
        text: tri(
            "I Almost Gave Up Entirely. Then I Tried {title} for 30 Days",
            "The 30-Day {title} Experiment That Changed How I Start Every Morning",
            "I Tested {title} Against Everything in My Cabinet. Here Is What Actually Held Up",
        ),
        sub: Some(tri(
            "A first-person account of what happened when nothing else was working.",
            "What one month of small, consistent changes actually looks like.",
            "A side-by-side month of testing, with receipts.",
        )),
    }),
    slot(SlotCopy::AuthorByline {
        name: "Morgan Hale",
        title: "Contributing Writer",
        date: "Updated this week",
    }),
    slot(SlotCopy::SocialProof {
        text: tri(
            "Read by 41,000+ people who were ready to give up too",
            "Join 41,000+ readers who started the same way",
            "41,000+ readers compared before buying",
        ),
        highlight: Some("★★★★★ 4.8/5 from verified buyers"),
    }),
    slot(SlotCopy::Image {
        url: "https://placehold.co/800x450",
        alt: uni("{title} on a bathroom counter, morning light"),
        caption: Some(uni("The author's own {title}, week four.")),
    }),
    slot(SlotCopy::Text {
        heading: None,
        body: tri(
            "I want to be honest with you: I did not expect this to work. I had a drawer full of things that promised the world and delivered a receipt. If that sounds familiar, this is for you.",
            "There is a particular kind of optimism you feel when a routine finally clicks. I had been chasing that feeling for two years. This is the story of the month it arrived.",
            "Before I spent another dollar, I decided to run a proper comparison: the three products I already owned, plus the one everyone kept recommending. One month, same routine, notes every night.",
        ),
    }),
    slot(SlotCopy::Text {
        heading: Some(tri(
            "The part nobody talks about",
            "Where it started",
            "How I set up the test",
        )),
        body: tri(
            "The frustrating part was never the money. It was getting my hopes up, following the instructions to the letter, and watching nothing change. By the time a coworker mentioned {title}, my expectations were on the floor.",
            "My goal was modest: one visible improvement by the end of the month. A friend had been quietly using {title} for a season and the difference was hard to ignore, so that became the plan. {description}",
            "Same time every morning, same order of steps, one variable changed per week. {title} went last because I was sure it would be the letdown. {description}",
        ),
    }),
    slot(SlotCopy::Note {
        heading: "Editor's note",
        body: uni(
            "The author purchased {title} at full retail price. This account reflects one person's experience; individual results vary.",
        ),
    }),
    slot(SlotCopy::Text {
        heading: Some(tri(
            "What changed by week three",
            "The morning it clicked",
            "The result I did not expect",
        )),
        body: tri(
            "I marked day seventeen in my notes with one word: finally. Not a miracle, not overnight. Just the steady, boring kind of progress I had stopped believing was possible. {description}",
            "By week three the routine took ninety seconds and I stopped thinking about it. That is when the compounding started. {description}",
            "The products I already owned were not bad. They were just outclassed. On every line item I tracked, {title} either matched or beat the incumbent, and on the two I cared most about it was not close.",
        ),
    }),
    slot(SlotCopy::FeatureList {
        heading: uni("What is actually in the box"),
        features: uni(&[
            FeatureCopy {
                title: "Full-size {title}",
                text: "The same unit sold in stores, not a sample.",
            },
            FeatureCopy {
                title: "Plain-language instructions",
                text: "A one-page routine, not a booklet of fine print.",
            },
            FeatureCopy {
                title: "90-day guarantee card",
                text: "Return it for any reason within three months.",
            },
            FeatureCopy {
                title: "Free shipping",
                text: "",
            },
        ]),
    }),
    slot_only(
        SlotCopy::Comparison {
            heading: uni("{title} versus what I was using before"),
            us_label: "{title}",
            them_label: "My old routine",
            rows: &[
                RowCopy {
                    feature: "Visible difference within 30 days",
                    us: "Yes",
                    them: "Never",
                },
                RowCopy {
                    feature: "Time per day",
                    us: "Under 2 minutes",
                    them: "10+ minutes",
                },
                RowCopy {
                    feature: "Money-back guarantee",
                    us: "90 days",
                    them: "Store credit only",
                },
                RowCopy {
                    feature: "Works without extra add-ons",
                    us: "Yes",
                    them: "No",
                },
            ],
        },
        Angle::Comparison,
    ),
    slot(SlotCopy::Testimonials {
        heading: tri(
            "From people who had also given up",
            "From people a few weeks ahead of you",
            "From people who switched",
        ),
        entries: uni(&[
            TestimonialCopy {
                quote: "I kept my receipt ready for the refund. Never used it.",
                name: "Dana W.",
                detail: "Verified buyer",
            },
            TestimonialCopy {
                quote: "Three weeks in, my sister asked what I had changed. That had never happened before.",
                name: "Camille R.",
                detail: "Verified buyer",
            },
            TestimonialCopy {
                quote: "I replaced two products with this one and my mornings got simpler and better at the same time.",
                name: "Theo B.",
                detail: "Verified buyer",
            },
        ]),
    }),
    slot(SlotCopy::Stats {
        heading: Some(uni("What buyers report")),
        entries: uni(&[
            StatCopy {
                value: "93%",
                label: "noticed a difference within a month",
            },
            StatCopy {
                value: "87%",
                label: "replaced at least one other product",
            },
            StatCopy {
                value: "4.8/5",
                label: "average verified rating",
            },
        ]),
    }),
    slot(SlotCopy::Guarantee {
        heading: "90-Day Money-Back Guarantee",
        body: uni(
            "Use {title} for a full 90 days. If you are not genuinely glad you bought it, send it back for a complete refund, including shipping.",
        ),
        badge: "Risk-free",
    }),
    slot(SlotCopy::Cta {
        heading: Some(tri(
            "If you are where I was, start here",
            "Your month one starts today",
            "See the difference for yourself",
        )),
        button: uni("Check Availability"),
        sub: Some(uni("Free shipping. 90-day guarantee on every order.")),
    }),
    slot(SlotCopy::Faq {
        heading: "Questions I had before ordering",
        items: uni(&[
            FaqCopy {
                question: "How long until I notice anything?",
                answer: "Most buyers report the first visible change inside 30 days. Mine came on day seventeen.",
            },
            FaqCopy {
                question: "What if it does not work for me?",
                answer: "Every order carries a 90-day money-back guarantee. Return it for a full refund, no questions asked.",
            },
            FaqCopy {
                question: "How fast is shipping?",
                answer: "Orders ship within 24 hours and typically arrive in 3-5 business days.",
            },
        ]),
    }),
    slot(SlotCopy::Comments {
        heading: "Reader comments",
        entries: &[
            CommentCopy {
                name: "Priya K.",
                text: "This article convinced me to try it. Week two and so far it tracks.",
                likes: 48,
                time_ago: "3d",
            },
            CommentCopy {
                name: "Marcus L.",
                text: "Bought one for my mom after reading this. She will not stop mentioning it.",
                likes: 31,
                time_ago: "1w",
            },
            CommentCopy {
                name: "Elena S.",
                text: "Appreciate the honesty about the first two weeks. Too many of these pretend it is instant.",
                likes: 27,
                time_ago: "1w",
            },
        ],
    }),
    slot(SlotCopy::Disclaimer),
];
