//! Before/after transformation story. Eighteen slots; seventeen blocks under
//! pain and aspiration, eighteen under comparison.

use crate::application::generator::Angle;
use crate::application::generator::copy::{
    CommentCopy, FaqCopy, FeatureCopy, RowCopy, Slot, SlotCopy, StatCopy, StepCopy,
    TestimonialCopy, slot, slot_only, tri, uni,
};

pub(crate) static SLOTS: &[Slot] = &[
    slot(SlotCopy::Headline {
        text: tri(
            "Six Months Ago I Was Ready to Quit. {title} Is the Reason I Didn't",
            "From 'Fine, I Guess' to the Best Season I've Had: My {title} Story",
            "I Switched to {title} After Years With the Popular Option. The Difference Is Night and Day",
        ),
        sub: Some(uni("A before-and-after account, with the awkward middle included.")),
    }),
    slot(SlotCopy::AuthorByline {
        name: "Sasha Beaumont",
        title: "Guest Contributor",
        date: "Updated this month",
    }),
    slot(SlotCopy::SocialProof {
        text: uni("One of 24,000+ customer stories this year"),
        highlight: Some("★★★★★ 4.8/5 average verified rating"),
    }),
    slot(SlotCopy::Text {
        heading: Some(uni("Before")),
        body: tri(
            "Here is where I was: every morning started with the same small defeat, and every fix I tried made promises it could not keep. I had stopped telling friends about new attempts because I was tired of reporting failures.",
            "I was fine. That was the problem. Everything worked just well enough that changing felt unnecessary, and just poorly enough that I thought about it every single day.",
            "For years I used the option everyone defaults to. It was acceptable, which is exactly as far as it ever got. The upgrade I kept postponing turned out to be the one that mattered.",
        ),
    }),
    slot(SlotCopy::Image {
        url: "https://placehold.co/800x450",
        alt: uni("Side-by-side: before starting {title}, and three months in"),
        caption: Some(uni("Three months apart. Same light, same angle.")),
    }),
    slot(SlotCopy::Timeline {
        heading: uni("How the change actually unfolded"),
        steps: tri(
            &[
                StepCopy { label: "Week 1", text: "Skeptical. Followed the {title} routine mostly to prove it wrong." },
                StepCopy { label: "Week 3", text: "The first morning that felt different. Checked twice to be sure." },
                StepCopy { label: "Month 2", text: "Stopped thinking about the old problem. That was the real milestone." },
                StepCopy { label: "Month 6", text: "Friends started asking. This article is the long answer." },
            ],
            &[
                StepCopy { label: "Week 1", text: "A pleasantly boring start. Two minutes a day, no drama." },
                StepCopy { label: "Week 3", text: "First unprompted compliment. Wrote the date down." },
                StepCopy { label: "Month 2", text: "The routine became automatic, the results became obvious." },
                StepCopy { label: "Month 6", text: "Cannot imagine going back. The before photos feel like someone else." },
            ],
            &[
                StepCopy { label: "Week 1", text: "Ran {title} side by side with my old option. Early edge, small but real." },
                StepCopy { label: "Week 3", text: "Retired the old option. The comparison stopped being close." },
                StepCopy { label: "Month 2", text: "Recommended the switch to my sister. She switched too." },
                StepCopy { label: "Month 6", text: "The only regret is the years spent on the default choice." },
            ],
        ),
    }),
    slot(SlotCopy::Text {
        heading: Some(uni("The turning point")),
        body: uni(
            "What finally made the difference was not effort, it was design. {description} {title} asks for two minutes a day and repays it with the kind of progress you can photograph.",
        ),
    }),
    slot(SlotCopy::FeatureList {
        heading: uni("What I credit most"),
        features: uni(&[
            FeatureCopy {
                title: "A routine that survives bad weeks",
                text: "I missed days and it did not undo the progress.",
            },
            FeatureCopy {
                title: "No add-on purchases",
                text: "One product, the whole job.",
            },
            FeatureCopy {
                title: "The 90-day guarantee",
                text: "It is the only reason a skeptic like me tried at all.",
            },
        ]),
    }),
    slot_only(
        SlotCopy::Comparison {
            heading: uni("{title} versus my old default"),
            us_label: "{title}",
            them_label: "The popular option",
            rows: &[
                RowCopy { feature: "First noticeable change", us: "Week 3", them: "Never arrived" },
                RowCopy { feature: "Daily time", us: "2 minutes", them: "8 minutes" },
                RowCopy { feature: "Monthly cost including add-ons", us: "$13", them: "$31" },
                RowCopy { feature: "Guarantee", us: "90 days", them: "None" },
            ],
        },
        Angle::Comparison,
    ),
    slot(SlotCopy::Stats {
        heading: Some(uni("My story is the typical one")),
        entries: uni(&[
            StatCopy { value: "93%", label: "of buyers report a visible change within a month" },
            StatCopy { value: "4.8/5", label: "average verified rating" },
            StatCopy { value: "90 days", label: "to decide, fully refundable" },
        ]),
    }),
    slot(SlotCopy::Testimonials {
        heading: uni("Other before-and-afters"),
        entries: uni(&[
            TestimonialCopy {
                quote: "My week three was a lot like the author's. The middle part is awkward and then suddenly it isn't.",
                name: "Noor A.",
                detail: "Verified buyer",
            },
            TestimonialCopy {
                quote: "Six months in. My before photo is my phone background as a reminder.",
                name: "Chris V.",
                detail: "Verified buyer",
            },
            TestimonialCopy {
                quote: "I switched from the popular option too. Should have done it years earlier.",
                name: "Gabi M.",
                detail: "Verified buyer",
            },
        ]),
    }),
    slot(SlotCopy::Note {
        heading: "Editor's note",
        body: uni(
            "Guest contributors purchase products at retail and are not compensated by the brand. Individual results vary.",
        ),
    }),
    slot(SlotCopy::Guarantee {
        heading: "90-Day Money-Back Guarantee",
        body: uni(
            "Start your own before-and-after: if day 90 does not look different from day 1, return {title} for a full refund.",
        ),
        badge: "Risk-free",
    }),
    slot(SlotCopy::UrgencyBanner {
        text: tri(
            "Don't spend another season where you are: current stock is moving quickly",
            "Your month one could start today: current stock is moving quickly",
            "Switching is easiest while the bundle pricing lasts",
        ),
        countdown_label: "Offer ends soon",
    }),
    slot(SlotCopy::Cta {
        heading: Some(uni("Start your own transformation")),
        button: uni("Check Availability"),
        sub: Some(uni("Free shipping. 90 days to change your mind.")),
    }),
    slot(SlotCopy::Comments {
        heading: "Reader comments",
        entries: &[
            CommentCopy {
                name: "Jo R.",
                text: "The 'fine, I guess' line hit hard. Ordered mine last night.",
                likes: 56,
                time_ago: "2d",
            },
            CommentCopy {
                name: "Pat H.",
                text: "Can confirm the awkward middle. Push through to week four, it is worth it.",
                likes: 34,
                time_ago: "5d",
            },
        ],
    }),
    slot(SlotCopy::Faq {
        heading: "Questions from readers",
        items: uni(&[
            FaqCopy {
                question: "Did you change anything else during the six months?",
                answer: "No. {title} was the only variable, which is what made the comparison meaningful.",
            },
            FaqCopy {
                question: "What happens if I miss days?",
                answer: "The author missed several. Progress slows but does not reset; consistency beats perfection.",
            },
            FaqCopy {
                question: "Is the guarantee really no-questions-asked?",
                answer: "Yes. Ninety days, full refund, shipping included.",
            },
        ]),
    }),
    slot(SlotCopy::Disclaimer),
];
