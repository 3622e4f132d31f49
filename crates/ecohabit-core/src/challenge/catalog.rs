//! The built-in challenge catalog.

use super::{Challenge, ChallengeCategory, ImageKind};

/// The fixed, ordered set of challenges every session starts with.
///
/// Ids are generated on each call, so two catalogs never share identities.
pub fn default_catalog() -> Vec<Challenge> {
    use ChallengeCategory::*;

    vec![
        Challenge::new(
            "Use Reusable Bags",
            "reusablebags",
            ImageKind::Asset,
            Recycling,
            "Plastic bags can harm animals and pollute our oceans. By using reusable bags, we can help keep our planet clean and safe for all creatures!",
            "Using reusable bags reduces plastic waste, saves energy, and protects wildlife. It's a simple way to make a big difference!",
            "For one week, remember to bring your own reusable bag whenever you go shopping with your family. Count how many times you use it!",
        ),
        Challenge::new(
            "Water Wizard",
            "conservewater",
            ImageKind::Asset,
            Water,
            "Water is precious! By using less water, we can help save this important resource for everyone and everything on Earth.",
            "Saving water helps protect rivers and lakes, saves energy used to clean and transport water, and ensures there's enough for all living things.",
            "This week, try to take shorter showers. Set a timer for 5 minutes and see if you can finish before it goes off!",
        ),
        Challenge::new(
            "Solar Explorer",
            "gosolar",
            ImageKind::Asset,
            Energy,
            "The sun gives us free, clean energy! Learning about solar power helps us understand how we can use this amazing resource.",
            "Solar energy is clean, renewable, and doesn't produce harmful gases. It helps fight climate change and can be used almost anywhere!",
            "Build a simple solar oven using a pizza box and aluminum foil. Try to melt a marshmallow in it on a sunny day!",
        ),
        Challenge::new(
            "Energy Detective",
            "saveelectricity",
            ImageKind::Asset,
            Energy,
            "Saving electricity is like giving the Earth a big hug! It helps reduce pollution and conserve valuable resources.",
            "Using less electricity means we burn less fossil fuels, which helps keep our air clean and reduces climate change.",
            "Become an energy detective in your home! Count how many lights and electronics you can turn off when not in use for a day.",
        ),
        Challenge::new(
            "Carpool Captain",
            "carpool",
            ImageKind::Asset,
            Transportation,
            "Sharing rides is fun and good for the planet! It means fewer cars on the road, which helps keep our air clean.",
            "Carpooling reduces air pollution, saves fuel, and can even help make new friends! It's a great way to travel and care for the Earth.",
            "Next time you go to school or an activity, try to carpool with a friend. Keep a log of how many times you carpool in a month!",
        ),
        Challenge::new(
            "Recycling Hero",
            "recyclewaste",
            ImageKind::Asset,
            Recycling,
            "Recycling is like giving trash a second chance to be useful! It helps save resources and reduce waste in landfills.",
            "Recycling conserves natural resources, saves energy, reduces pollution, and helps protect wildlife habitats.",
            "Create a recycling station at home with different bins for paper, plastic, and metal. Help your family sort the recyclables for a week!",
        ),
        Challenge::new(
            "Tree Champion",
            "plantatree",
            ImageKind::Asset,
            Nature,
            "Trees are like superheroes for our planet! They clean the air, provide homes for animals, and make oxygen for us to breathe.",
            "Planting trees helps fight climate change, prevents soil erosion, provides habitat for wildlife, and makes our neighborhoods beautiful!",
            "Plant a small tree or a seed in your yard or a pot. Take care of it and watch it grow over time. Name your tree!",
        ),
        Challenge::new(
            "Plastic Buster",
            "noplastic",
            ImageKind::Asset,
            Recycling,
            "Single-use plastics can harm animals and pollute our environment. By avoiding them, we can help keep our planet clean and safe!",
            "Reducing plastic use helps protect marine life, reduces pollution in oceans and landfills, and saves energy used to produce plastics.",
            "For one week, try to avoid using single-use plastics like straws or plastic water bottles. Keep a tally of how many times you say 'No thanks!' to plastic.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_eight_unstarted_challenges() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 8);
        assert!(catalog.iter().all(|c| !c.is_started()));
        assert_eq!(catalog[0].title, "Use Reusable Bags");
        assert_eq!(catalog[7].title, "Plastic Buster");
    }

    #[test]
    fn catalog_ids_are_unique() {
        let catalog = default_catalog();
        let ids: HashSet<_> = catalog.iter().map(Challenge::id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn no_record_uses_the_filter_category() {
        assert!(default_catalog()
            .iter()
            .all(|c| c.category() != ChallengeCategory::All));
    }
}
