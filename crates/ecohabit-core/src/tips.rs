//! Everyday eco-friendly tips shown alongside the challenges.

/// Tips in display order.
pub const ECO_TIPS: [&str; 10] = [
    "Turn off lights when you leave a room",
    "Use a reusable water bottle instead of buying plastic bottles",
    "Take shorter showers to conserve water",
    "Use public transportation or carpool when possible",
    "Recycle paper, plastic, and glass",
    "Use energy-efficient light bulbs",
    "Unplug electronics when not in use",
    "Start a compost bin for food scraps",
    "Use cloth bags instead of plastic bags for shopping",
    "Plant trees or start a small garden",
];
