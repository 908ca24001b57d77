use crate::application::generator::copy::{Slot, SlotCopy, slot, tri};

pub(crate) static SLOTS: &[Slot] = &[
    slot(SlotCopy::Headline {
        text: tri(
            "Tired of Products That Overpromise? {title} Was Built for People Who Have Been Let Down Before",
            "Meet {title}: The Simple Upgrade Your Routine Has Been Missing",
            "Why Thousands Are Switching to {title} and Not Looking Back",
        ),
        sub: None,
    }),
    slot(SlotCopy::Text {
        heading: None,
        body: tri(
            "If you have cycled through option after option and ended up disappointed, you are not alone. {description} That is the whole point of {title}: one thing, done properly.",
            "Small changes compound. {description} {title} is designed to slot into your day without friction, so the results take care of themselves.",
            "Most alternatives cut the same three corners: cheaper materials, vaguer claims, and no guarantee. {title} takes the opposite approach. {description}",
        ),
    }),
    slot(SlotCopy::Disclaimer),
];
