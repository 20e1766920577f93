//! Prompt builder for the ink-sketch thumbnail style.
//!
//! Maps a symbolic location key to a scene description and interpolates it
//! into the fixed style and composition templates. Lookup is case-insensitive
//! and total: unknown keys fall back to a generic description built from the
//! key text itself, so any city name produces a usable prompt.

/// Location presets, in the order they are listed to users.
pub const LOCATIONS: &[(&str, &str)] = &[
    (
        "chicago",
        "Chicago street scene - elevated L train tracks overhead, classic brick buildings, \
         urban density, maybe a glimpse of downtown towers in the distance. Winter or autumn mood.",
    ),
    (
        "manila",
        "Manila street scene - dense urban chaos, jeepneys, tangled power lines everywhere, \
         old Spanish-colonial buildings mixed with modern concrete, sari-sari stores, tropical \
         plants peeking through. Humid, busy energy even when empty.",
    ),
    (
        "la",
        "Los Angeles street scene - wide palm-tree lined streets, low-rise buildings, that \
         golden California light, maybe distant hills. Laid-back, sunny vibe.",
    ),
    (
        "orlando",
        "Orlando suburban street - humid Florida feel, strip malls, palm trees, flat landscape, \
         big sky with clouds. Quiet, almost empty roads.",
    ),
    (
        "champaign",
        "Champaign-Urbana college town street - flat midwestern landscape, old brick campus \
         buildings, wide streets, cornfields in the distance. Quiet, academic vibe.",
    ),
    (
        "malecon",
        "The Puerto Vallarta Malecon boardwalk featuring the famous \"El Caballito\" bronze \
         sculpture: a young boy sitting on top of a giant seahorse, the boy has one arm raised \
         up reaching toward the sky. The sculpture has green-blue patina and sits on a dark \
         stone pedestal. Behind it: the curved seaside promenade with decorative wrought iron \
         railings, palm trees, Banderas Bay ocean, clear blue sky. The boy-on-seahorse statue \
         is the central focus.",
    ),
    (
        "cafe",
        "Interior of a cozy LA coffee shop - exposed brick wall on one side, white walls with \
         hand-drawn murals and plant illustrations, industrial pendant lights hanging from \
         ceiling, green-tiled coffee counter with espresso machine, burlap coffee bean sacks \
         on the floor, wooden tables, warm inviting atmosphere. No people.",
    ),
];

/// Location used when the caller does not pass one.
pub const DEFAULT_LOCATION: &str = "chicago";

const ART_STYLE: &str = "\
Rough hand-drawn ink sketch style:
- ROUGH, LOOSE, SKETCHY lines - NOT clean or polished
- Lines should look hand-drawn with slight imperfections and varying thickness
- Messy, organic linework like a quick pen sketch in a notebook
- MOSTLY UNFILLED white space with scratchy ink lines
- Only one accent color (muted blue/teal) used sparingly
- Casual, effortless feel - like someone sketched this in 5 minutes
- NOT graphic design, NOT vector art, NOT polished illustration
- Think: loose ink drawing on paper, visible pen strokes, rough edges
- Imperfect and charming, not clean and corporate
- NO PEOPLE in the scene - empty streets";

const COMPOSITION: &str = "\
COMPOSITION:
- Urban street-level perspective - like standing on a sidewalk looking down the street
- NO PEOPLE - empty streets, quiet city moment
- Buildings, street lights, power lines, signs, train tracks if relevant
- Off-white or cream paper background - like drawn on sketch paper
- Loose, rough sketch lines, hand-drawn feel
- Muted blue/teal as the only accent color
- NO text, words, or readable letters in the image
- 16:9 landscape ratio
- Should look like a page torn from an artist's travel sketchbook";

/// Looks up a location preset case-insensitively.
#[must_use]
pub fn location_description(location: &str) -> Option<&'static str> {
    LOCATIONS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(location))
        .map(|(_, description)| *description)
}

/// Builds the text-to-image prompt for a location.
///
/// Unknown locations get a generic description built from the literal
/// (non-lowercased) key text, so this is total over all inputs.
#[must_use]
pub fn location_prompt(location: &str) -> String {
    let description = location_description(location).map_or_else(
        || {
            format!(
                "{location} street scene - capture the unique character of this city's \
                 streets, architecture, and atmosphere."
            )
        },
        str::to_string,
    );

    format!(
        "Create an illustration of a city street scene.\n\n\
         LOCATION: {description}\n\n\
         {ART_STYLE}\n\n\
         {COMPOSITION}"
    )
}

/// Builds the image-edit prompt used to redraw a reference photo.
#[must_use]
pub fn reference_prompt() -> String {
    format!(
        "Transform this photo into a rough hand-drawn ink sketch style illustration.\n\n\
         Keep the same composition, buildings, architecture, and location from the photo \
         but redraw it as:\n\
         {ART_STYLE}\n\n\
         Keep all the landmarks and architectural details from the original photo.\n\
         Remove any people - make it an empty scene.\n\
         Make it 16:9 landscape aspect ratio."
    )
}
