use crate::composer::ResponseComposer;
use crate::keywords::KeywordHits;
use crate::knowledge::KnowledgeBase;
use crate::messages;
use crate::models::MatchResult;
use crate::normalize::normalize_text;

/// Everything a resolver may look at for one inquiry.
#[derive(Debug, Clone)]
pub struct InquiryContext<'a, 'kb> {
    pub normalized: &'a str,
    pub kb: &'kb KnowledgeBase,
    pub matched: MatchResult<'kb>,
    pub keywords: KeywordHits,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolver {
    AvailabilityAndPricing,
    CargoTypeDetails,
    PricingIntent,
    TransitTime,
    GeneralService,
    Fallback,
}

impl Resolver {
    /// Resolvers run in this order; later ones may check what earlier ones produced.
    pub const ORDER: [Resolver; 6] = [
        Resolver::AvailabilityAndPricing,
        Resolver::CargoTypeDetails,
        Resolver::PricingIntent,
        Resolver::TransitTime,
        Resolver::GeneralService,
        Resolver::Fallback,
    ];

    pub fn apply(self, ctx: &InquiryContext<'_, '_>, out: &mut ResponseComposer) {
        match self {
            Self::AvailabilityAndPricing => availability_and_pricing(ctx, out),
            Self::CargoTypeDetails => cargo_type_details(ctx, out),
            Self::PricingIntent => pricing_intent(ctx, out),
            Self::TransitTime => transit_time(ctx, out),
            Self::GeneralService => general_service(ctx, out),
            Self::Fallback => fallback(out),
        }
    }
}

/// Runs every resolver in order and reports the ones that added a line.
pub fn run_resolvers(ctx: &InquiryContext<'_, '_>, out: &mut ResponseComposer) -> Vec<Resolver> {
    let mut fired = Vec::new();
    for resolver in Resolver::ORDER {
        let before = out.len();
        resolver.apply(ctx, out);
        if out.len() > before {
            fired.push(resolver);
        }
    }
    fired
}

fn availability_and_pricing(ctx: &InquiryContext<'_, '_>, out: &mut ResponseComposer) {
    for destination in &ctx.matched.destinations {
        if !destination.available {
            out.push(messages::destination_unavailable(&destination.name));
            continue;
        }

        out.push(messages::destination_available(&destination.name));
        if let Some(price) = ctx.kb.base_price(&destination.name) {
            out.push(messages::base_price(&destination.name, price));
        }
    }
}

fn cargo_type_details(ctx: &InquiryContext<'_, '_>, out: &mut ResponseComposer) {
    for cargo in &ctx.matched.cargo_types {
        out.push(messages::cargo_description(&cargo.name, &cargo.description));
        if let Some(limitations) = cargo.limitations.as_deref() {
            out.push(messages::cargo_limitations(&cargo.name, limitations));
        }
        if let Some(multiplier) = ctx.kb.surcharge(&cargo.name) {
            out.push(messages::cargo_surcharge(&cargo.name, multiplier));
        }
    }
}

fn pricing_intent(ctx: &InquiryContext<'_, '_>, out: &mut ResponseComposer) {
    if !ctx.keywords.pricing || !out.is_empty() {
        return;
    }

    let has_destination = !ctx.matched.destinations.is_empty();
    let has_cargo_type = !ctx.matched.cargo_types.is_empty();

    match (has_destination, has_cargo_type) {
        (false, false) => {
            out.push(messages::PRICING_NEEDS_DETAILS);
        }
        (false, true) => {
            out.push(messages::PRICING_ASK_DESTINATION);
        }
        (true, false) => {
            out.push(messages::PRICING_ASK_CARGO_TYPE);
        }
        (true, true) => {}
    }
}

fn transit_time(ctx: &InquiryContext<'_, '_>, out: &mut ResponseComposer) {
    if !ctx.keywords.transit_time {
        return;
    }

    let matched_destinations = ctx
        .matched
        .destinations
        .iter()
        .map(|d| normalize_text(&d.name))
        .collect::<Vec<_>>();
    let matched_cargo_types = ctx
        .matched
        .cargo_types
        .iter()
        .map(|c| normalize_text(&c.name))
        .collect::<Vec<_>>();

    let mut emitted = false;
    for entry in ctx.kb.transit_times().unwrap_or_default() {
        let destination = normalize_text(&entry.destination);
        let cargo_type = normalize_text(&entry.cargo_type);
        let line =
            messages::transit_time(&entry.cargo_type, &entry.destination, &entry.estimated_days);

        // A record naming both the destination and the cargo type wins outright.
        if mentions(ctx.normalized, &destination) && mentions(ctx.normalized, &cargo_type) {
            out.push(line);
            emitted = true;
            break;
        }

        if matched_destinations.contains(&destination) || matched_cargo_types.contains(&cargo_type)
        {
            out.push(line);
            emitted = true;
        }
    }

    if emitted {
        return;
    }

    let destinations = ctx.matched.destination_names();
    let cargo_types = ctx.matched.cargo_type_names();
    let line = match (destinations.is_empty(), cargo_types.is_empty()) {
        (false, false) => messages::transit_unknown_pair(&cargo_types, &destinations),
        (false, true) => messages::transit_ask_cargo_type(&destinations),
        (true, false) => messages::transit_ask_destination(&cargo_types),
        (true, true) => messages::TRANSIT_GENERIC.to_string(),
    };
    out.push(line);
}

fn general_service(ctx: &InquiryContext<'_, '_>, out: &mut ResponseComposer) {
    if ctx.keywords.general_service && out.is_empty() {
        out.push(messages::SERVICE_OVERVIEW);
    }
}

fn fallback(out: &mut ResponseComposer) {
    if out.is_empty() {
        out.push(messages::NOTHING_FOUND);
    }
}

fn mentions(normalized_inquiry: &str, normalized_name: &str) -> bool {
    !normalized_name.is_empty() && normalized_inquiry.contains(normalized_name)
}
