//! Generates the Sola PR strategy and press materials PDF. All copy is
//! fixed; only the output path is configurable.

use clap::Parser;
use pressroom::press::{self, CoverPage, PressDocument};
use pressroom::{DocumentError, DocumentPipeline};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pressdoc", version, about)]
struct Args {
    /// Output PDF path
    #[arg(long, default_value = "Sola_PR_Strategy_March_2026.pdf")]
    out: PathBuf,
}

fn main() -> Result<(), DocumentError> {
    env_logger::init();
    let args = Args::parse();

    let doc = build_document();
    let theme = press::theme(Some(
        "Sola -- PR Strategy & Press Materials -- March 8, 2026".to_string(),
    ));
    let title = doc.title().to_string();
    DocumentPipeline::new(theme).render_blocks_to_file(doc.blocks(), &title, &args.out)?;

    println!("PDF generated: {}", args.out.display());
    Ok(())
}

fn build_document() -> PressDocument {
    let mut doc = PressDocument::new("Sola PR Strategy & Press Materials");

    doc.cover(CoverPage {
        product: "Sola".to_string(),
        subtitle: "PR Strategy & Press Materials".to_string(),
        dateline: "International Women's Day - March 8, 2026".to_string(),
        tagline: "The information women deserve.".to_string(),
        footer_lines: vec![
            "Prepared for internal use".to_string(),
            "Bokang Sibolla  |  Aigerim Tabazhanova  |  Clemence Casali  |  Sergio Ruiz Moral"
                .to_string(),
        ],
    });

    internal_note(&mut doc);

    doc.contents(&[
        ("1", "Core Thesis & Positioning"),
        ("2", "Three-Layer Outreach Strategy"),
        ("3", "The Founding Manifesto: \"The Information Women Deserve\""),
        ("4", "Press Release"),
        ("5", "Open Letter to the Travel Industry"),
        ("6", "Tactical Outreach Playbook"),
    ]);

    core_thesis(&mut doc);
    outreach_strategy(&mut doc);
    manifesto(&mut doc);
    press_release(&mut doc);
    open_letter(&mut doc);
    playbook(&mut doc);

    doc
}

fn internal_note(doc: &mut PressDocument) {
    doc.page_break();
    doc.spacer(42.0);
    doc.heading("A Note on the Founding Team");
    doc.body(
        "Sola has four cofounders: Bokang Sibolla, Aigerim Tabazhanova, Clemence Casali, \
         and Sergio Ruiz Moral.",
    );
    doc.body(
        "For the purposes of this PR campaign, the front-facing narrative features three \
         cofounders: Bokang, Aigerim, and Clemence. This is a deliberate editorial decision \
         to maintain balance in the story we are telling. The campaign centres the gender data \
         gap and the experiences of women travelers. One man in the story adds nuance. Two \
         changes the frame.",
    );
    doc.body(
        "Sergio is a cofounder of Sola. His contributions to building this company are real \
         and valued. This decision is about narrative strategy for a specific campaign tied to \
         International Women's Day, not about his role in the company. Sergio's story will be \
         featured in future communications, profiles, and press as we grow beyond this initial \
         moment.",
    );
    doc.body_italic(
        "This page is for internal reference only and should not be shared externally.",
    );
}

fn core_thesis(doc: &mut PressDocument) {
    doc.section(
        "1. Core Thesis & Positioning",
        "The central argument that underpins all press materials and outreach.",
    );

    doc.heading("The Argument");
    doc.body(
        "The travel industry has a gender data gap. Every year, millions of women spend \
         uncounted hours performing research that the industry should have already provided. \
         Safety information, harassment norms, dress code navigation, solo-friendly \
         accommodation, healthcare access, cultural rules around women's movement. This is \
         invisible labor. It is unpaid. And it subsidises an industry that was designed around \
         a default traveler who doesn't need any of it.",
    );
    doc.body(
        "Sola reframes this gap as a systemic design failure and builds the infrastructure \
         to close it permanently. The product was built on 400+ face-to-face conversations \
         with solo female travelers. No surveys. No focus groups. Ethnographic-level primary \
         research conducted over months in one of the world's busiest solo travel corridors.",
    );

    doc.heading("Positioning by Audience");
    doc.subheading("Academics / Harvard Business Review");
    doc.body(
        "A $9.5 trillion industry that never designed its core information product for half \
         its users. The economics of a gender data gap.",
    );
    doc.subheading("Tech / Startup Press");
    doc.body(
        "Zero funding, no engineers. Domain expertise meets democratised tools. What happens \
         when the people who understand the problem get the ability to build the solution.",
    );
    doc.subheading("Travel Media");
    doc.body("400 conversations in Manila. The travel product none of them had ever been offered.");
    doc.subheading("Women's / Culture Publications");
    doc.body("She was on sabbatical. She bought a laptop the next day.");
    doc.subheading("LinkedIn / Viral");
    doc.body(
        "The travel industry collects data on everything except what women actually need to \
         know.",
    );
}

fn outreach_strategy(doc: &mut PressDocument) {
    doc.section(
        "2. Three-Layer Outreach Strategy",
        "Build the wave organically, then let press amplify it.",
    );

    doc.heading("Layer 1: Founder-Led Content (March 1-7)");
    doc.body(
        "Build organic momentum before press hits. Each founder publishes personal content on \
         LinkedIn that establishes credibility, tells the human story, and creates a searchable \
         trail for journalists doing due diligence.",
    );
    doc.subheading("March 1 -- Bokang Sibolla (LinkedIn)");
    doc.body(
        "Long-form post: \"I spent months outside Manila hostels talking to 400 solo female \
         travelers. Here's what the travel industry is missing.\" Data-forward. No product \
         mention until the last line.",
    );
    doc.subheading("March 3 -- Clemence Casali (LinkedIn / Medium)");
    doc.body(
        "Personal essay: \"I was on sabbatical. I wasn't supposed to work. Then I heard an idea \
         I couldn't walk away from.\" The laptop moment. What made her abandon rest for this.",
    );
    doc.subheading("March 5 -- Aigerim Tabazhanova (LinkedIn)");
    doc.body(
        "\"What I wish existed every time I traveled alone.\" Her experience as a solo female \
         traveler from Kazakhstan navigating Southeast Asia. Raw. First-person.",
    );
    doc.subheading("March 6 -- Bokang Sibolla (LinkedIn)");
    doc.body(
        "The framework post: \"The Gender Data Gap in Travel: An Invisible Subsidy.\" The \
         intellectual anchor. This is the post academics and journalists bookmark.",
    );
    doc.subheading("March 7 -- All Three Founders");
    doc.body("Cross-share each other's posts. Unified message: \"Tomorrow, we're telling the full story.\"");

    doc.heading("Layer 2: Targeted Press Pitches (Embargoed, Breaking March 8)");
    doc.body(
        "Each publication gets a different story. Not the same press release repackaged. Each \
         outlet should feel they have something unique.",
    );
    doc.subheading("Tier 1: The Intellectual Heavyweights");
    doc.bullet(
        "Harvard Business Review:",
        "\"The Gender Data Gap in Travel: How a $9.5 Trillion Industry Overlooked Half Its \
         Users.\" A contributed piece framing the systemic failure and the methodology.",
    );
    doc.bullet(
        "MIT Technology Review:",
        "\"What Happens When the People With the Problem Get the Tools to Solve It.\" The \
         democratised-tools angle.",
    );
    doc.bullet(
        "Fast Company:",
        "\"World Changing Ideas\" submission + feature pitch. Three people, three continents, \
         zero funding.",
    );
    doc.subheading("Tier 2: Startup & Tech Press");
    doc.bullet(
        "TechCrunch:",
        "\"No funding, no engineers: how three founders built a travel platform from a Manila \
         apartment.\"",
    );
    doc.bullet(
        "Rest of World:",
        "The Southeast Asia angle, the Global South perspective, Manila as a launchpad.",
    );
    doc.subheading("Tier 3: Travel & Women's Media");
    doc.bullet(
        "Conde Nast Traveler:",
        "\"400 solo female travelers told us what no guidebook covers.\"",
    );
    doc.bullet(
        "The Cut / Refinery29:",
        "Lead with Clemence. \"She was on sabbatical. She bought a laptop the next day.\"",
    );
    doc.subheading("Tier 4: Regional & African Press");
    doc.bullet(
        "Mail & Guardian (South Africa):",
        "\"From Lesotho to Manila: the South African building a global travel platform with \
         zero funding.\"",
    );
    doc.bullet(
        "Philippine Daily Inquirer:",
        "Local angle: built in Manila, serving travelers coming to the Philippines.",
    );

    doc.heading("Layer 3: The March 8 Moment");
    doc.body("This is not a launch day. The product is already live. This is a declaration day.");
    doc.bullet(
        "The Founding Manifesto:",
        "\"The Information Women Deserve\" -- published on Sola's website. 800 words. The \
         argument, the evidence, the mission, the invitation.",
    );
    doc.bullet(
        "The Open Letter:",
        "Addressed to the travel industry. Respectful but unflinching. Three unfunded founders \
         addressing a $9.5 trillion industry. Inherently newsworthy.",
    );
    doc.bullet(
        "The Partnership Invitation:",
        "Formal call for women's travel organizations, academic researchers, creators, impact \
         investors, and the industry itself to join in closing the gap.",
    );
}

fn manifesto(doc: &mut PressDocument) {
    doc.section(
        "3. The Founding Manifesto",
        "\"The Information Women Deserve\" -- Published on Sola's website, March 8, 2026.",
    );

    doc.heading("The Information Women Deserve");
    doc.body(
        "She checks the lock twice. She screenshots the hotel address and sends it to a friend \
         in another timezone with the message \"just in case.\" She budgets an extra hour \
         before every travel day. Not for packing. For the research no one did for her.",
    );
    doc.body("She does this invisibly. Automatically. In every country. On every trip.");
    doc.body(
        "The $9.5 trillion travel industry can tell her the optimal day to book a flight, the \
         trending restaurants in Lisbon, the best time to see the Northern Lights. It has never \
         once built a product that accounts for any of this.",
    );
    doc.body(
        "There is no living, structured, evolving dataset of what women actually need to know. \
         Only the goodwill of strangers, passed from one woman to the next like an inheritance \
         no one asked for. That is the invisible subsidy. Women performing unpaid information \
         labor to compensate for an industry that never considered their experience worth \
         designing for.",
    );

    doc.heading("We didn't set out to build a company. We set out because it was personal.");
    doc.body(
        "Aigerim is a solo traveler. She has navigated every version of this gap. But she has \
         a daughter, and the thought that her daughter might one day face the same absence was \
         something she couldn't sit with.",
    );
    doc.body(
        "Clemence was on sabbatical in the Philippines. For months she'd been making travel \
         guides for her mother and sister, doing it for love, the way women always have. Then \
         she heard what we were building. She bought a laptop the next day.",
    );
    doc.body(
        "Bokang grew up with a single mother, a diplomat who raised two children while moving \
         across the world. Years later, living in Manila near two of the city's most popular \
         hostels, he watched hundreds of women arrive carrying the same questions his mother \
         once carried. He spoke to over 400 of them.",
    );
    doc.body(
        "Three people. Three continents. South Africa, France, Kazakhstan. We met in Manila \
         with nothing in common except the certainty that this could not remain unsolved.",
    );

    doc.heading("This is an invitation.");
    doc.body(
        "To women's travel organizations: help us build the most comprehensive living resource \
         ever created for women who travel.",
    );
    doc.body(
        "To solo female travelers already doing this work for free in blog posts and group \
         chats: your knowledge has value. We built a platform that treats it that way.",
    );
    doc.body(
        "And to the travel industry: you have the reach. We have the research. The question is \
         whether you're ready to build for the users you've been overlooking.",
    );
    doc.spacer(14.0);
    doc.body_italic("Sola. The information women deserve.");
}

fn press_release(doc: &mut PressDocument) {
    doc.section(
        "4. Press Release",
        "For distribution to media outlets. Embargoed until March 8, 2026.",
    );

    doc.kicker("FOR IMMEDIATE RELEASE - MARCH 8, 2026");
    doc.heading(
        "Three Founders From Three Continents Built the Travel Platform the $9.5 Trillion \
         Industry Never Did",
    );
    doc.body_italic(
        "After 400 conversations with solo female travelers, Sola launches the first living \
         knowledge platform designed around what women actually need to know.",
    );
    doc.body(
        "MANILA, PHILIPPINES -- Women are the fastest-growing segment in global travel. They \
         are also the most underserved by the industry profiting from their growth. Sola, a \
         travel knowledge platform built by three founders from South Africa, France, and \
         Kazakhstan, launches its public mission today with a simple premise: the information \
         women need to travel safely, freely, and confidently has never been systematically \
         built. So they built it.",
    );
    doc.body(
        "\"Every woman we spoke to described the same experience,\" said Sibolla. \"Hours of \
         research before every trip that no guidebook, no platform, no app accounted for. Not \
         because the information doesn't exist, but because no one thought to structure it. \
         That's not a niche problem. It's a design failure at the centre of a $9.5 trillion \
         industry.\"",
    );
    doc.body(
        "While existing travel platforms optimise for price, convenience, and discovery, Sola \
         focuses on the layer of information women are currently forced to assemble \
         themselves: neighbourhood safety, cultural dress norms, solo-friendly accommodation, \
         healthcare and pharmacy access, and transport considerations specific to women \
         traveling alone. The platform was built without venture capital or institutional \
         funding.",
    );
    doc.body(
        "\"This is bigger than an app,\" said Tabazhanova. \"I have a daughter. One day she'll \
         travel the way I have. I want her to inherit better information than I had, not the \
         same gaps.\"",
    );

    doc.heading("About Sola");
    doc.body(
        "Sola is a travel knowledge platform built to close the gender data gap in travel. \
         Founded in Manila in 2025 by Bokang Sibolla (South Africa), Aigerim Tabazhanova \
         (Kazakhstan), and Clemence Casali (France), the platform was developed through \
         primary research with over 400 solo female travelers.",
    );
    doc.subheading("Media Contact");
    doc.body("[Name / Email / Phone]");
    doc.subheading("Press Kit");
    doc.body("[Link to downloadable assets, founder photos, product screenshots, key data points]");
}

fn open_letter(doc: &mut PressDocument) {
    doc.section(
        "5. Open Letter to the Travel Industry",
        "Published on Sola's website March 8, 2026. Sent directly to the press offices of the \
         companies named.",
    );

    doc.heading("An Open Letter to the Travel Industry");
    doc.body(
        "To the leadership of Booking.com, Airbnb, TripAdvisor, Google Travel, Lonely Planet, \
         Hostelworld, and every platform that serves travelers at scale:",
    );
    doc.body(
        "You know that women are the fastest-growing segment of your market. You have built \
         features for business travelers, budget travelers, luxury travelers, family \
         travelers, adventure travelers, and digital nomads. We would like to ask a \
         straightforward question: what have you built specifically for the information needs \
         of women who travel alone?",
    );
    doc.body(
        "Not marketing aimed at women. Not a \"solo travel\" filter that returns the same \
         results for everyone. Not a pink landing page in March. We mean structured, \
         maintained, destination-specific information that addresses what women actually need \
         to know and currently spend hours assembling on their own.",
    );
    doc.body(
        "We spent months in Manila speaking to over 400 solo female travelers from dozens of \
         countries. We did not survey them. We sat with them. Not one of them described a \
         single mainstream travel platform that addressed these needs.",
    );
    doc.body("Four hundred women. Zero platforms.");
    doc.body(
        "We are not writing this letter as competitors. We are three people who built a \
         platform from Manila with no funding because we couldn't wait for you to do it. We \
         have the research. We have the framework. We have a product that works. We would \
         welcome the conversation about how to do this at the scale your platforms make \
         possible.",
    );
    doc.body("Women should not have to subsidise your information gaps with their time.");
    doc.spacer(14.0);
    doc.body("Bokang Sibolla, Aigerim Tabazhanova, Clemence Casali");
    doc.body("Founders, Sola");
    doc.body("Manila, Philippines");
    doc.body("March 8, 2026");
}

fn playbook(doc: &mut PressDocument) {
    doc.section(
        "6. Tactical Outreach Playbook",
        "The week-by-week execution plan and outreach mechanics.",
    );

    doc.heading("Week of February 17-21: Preparation");
    doc.simple_bullet("Finalise all three written pieces (manifesto, press release, open letter)");
    doc.simple_bullet("Prepare press kit: founder photos, product screenshots, one-page fact sheet");
    doc.simple_bullet("Create a dedicated press page on the Sola website");
    doc.simple_bullet("Draft all three founders' LinkedIn posts for March 1-7");
    doc.simple_bullet("Build media list: identify specific journalists at each target publication");

    doc.heading("Week of February 24-28: Pre-Outreach");
    doc.simple_bullet("Submit HBR contributed article draft (long lead time -- submit early)");
    doc.simple_bullet("Submit Fast Company World Changing Ideas application");
    doc.simple_bullet("Begin warm outreach to journalists -- engage with their work, build familiarity");
    doc.simple_bullet("Set up email sequences for press pitches");

    doc.heading("Week of March 1-7: Content Launch + Embargoed Pitches");
    doc.simple_bullet("March 1: Bokang's LinkedIn post goes live. Embargoed pitches sent to Tier 1 and 2.");
    doc.simple_bullet("March 3: Clemence's LinkedIn/Medium essay goes live.");
    doc.simple_bullet("March 5: Aigerim's LinkedIn post goes live.");
    doc.simple_bullet("March 7: All three founders cross-share. Final check-in with embargoed journalists.");

    doc.heading("March 8: Declaration Day");
    doc.simple_bullet("Publish the manifesto and the open letter on Sola's website");
    doc.simple_bullet("Embargo lifts: press coverage goes live");
    doc.simple_bullet("Engage with every comment, share, and mention throughout the day");
    doc.simple_bullet("Send the open letter directly to press offices of named companies");

    doc.heading("Email Pitch Structure");
    doc.body("Every pitch email should follow this structure:");
    doc.bullet(
        "Subject line:",
        "Specific to the outlet's angle. Never generic. Example for Forbes: \"400 women. Zero \
         travel platforms built for them. A bootstrapped team in Manila changed that.\"",
    );
    doc.bullet(
        "Opening line:",
        "One sentence that hooks. Personalised to the journalist's beat.",
    );
    doc.bullet(
        "The story in three sentences:",
        "The problem. The 400 conversations. The product that exists.",
    );
    doc.bullet(
        "Why now:",
        "International Women's Day. Fastest-growing travel segment.",
    );
    doc.bullet("The ask:", "\"Would you be interested in an embargoed look at the full story?\"");
}
