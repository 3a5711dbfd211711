//! Offline protocol catalog.
//!
//! Canned first-aid protocols served when the uplink is down. Read-only
//! after compile: the catalog is a set of static line tables keyed by
//! category. Every category except General carries one header line
//! followed by numbered steps; General is a single advisory line.

use crate::category::Category;

/// One line of an offline protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolLine {
    /// Protocol name, rendered emphasized
    Header(&'static str),
    /// One instructional step
    Step(&'static str),
}

const TRAUMA: &[ProtocolLine] = &[
    ProtocolLine::Header("TRAUMA PROTOCOL // BLEEDING & CRUSH"),
    ProtocolLine::Step("Press firmly on the wound with the cleanest cloth available. Do not lift it to check."),
    ProtocolLine::Step("Raise the injured limb above heart level if no fracture is suspected."),
    ProtocolLine::Step("Never pull out an embedded object. Pad and bandage around it."),
    ProtocolLine::Step("If a limb has been pinned under debris for more than 15 minutes, do not free it yourself. Mark the position and signal rescuers."),
    ProtocolLine::Step("Keep the person warm and flat. Pale skin, cold sweat and a fast weak pulse mean shock."),
];

const ORTHOPEDIC: &[ProtocolLine] = &[
    ProtocolLine::Header("ORTHOPEDIC PROTOCOL // FRACTURE & SPINAL"),
    ProtocolLine::Step("If the neck or back may be hurt, do not move the person unless the building is failing."),
    ProtocolLine::Step("Splint a broken limb in the position found, fixing the joint above and the joint below."),
    ProtocolLine::Step("Never try to straighten a deformed limb."),
    ProtocolLine::Step("Cool the area over clothing with whatever cold you have, 20 minutes at a time."),
    ProtocolLine::Step("If you must drag the person clear, keep head, neck and spine in one line."),
];

const INTERNAL: &[ProtocolLine] = &[
    ProtocolLine::Header("INTERNAL PROTOCOL // ABDOMINAL INJURY"),
    ProtocolLine::Step("Lay the person on their back, knees bent, and keep them still."),
    ProtocolLine::Step("Give nothing to eat or drink, even if they ask."),
    ProtocolLine::Step("If organs are exposed, do not push them back. Cover with a clean damp cloth."),
    ProtocolLine::Step("A rigid, swelling or bruising belly after impact is a priority evacuation. Flag it to any responder."),
];

const RESPIRATORY: &[ProtocolLine] = &[
    ProtocolLine::Header("RESPIRATORY PROTOCOL // AIRWAY & CARDIAC"),
    ProtocolLine::Step("Tilt the head back and lift the chin to open the airway. Clear visible dust or debris from the mouth."),
    ProtocolLine::Step("Choking: 5 sharp blows between the shoulder blades, then 5 abdominal thrusts. Repeat."),
    ProtocolLine::Step("No breathing and no response: push hard and fast on the center of the chest, about 2 per second. Do not stop until relieved."),
    ProtocolLine::Step("In heavy dust, breathe through a damp cloth."),
    ProtocolLine::Step("If breathing is labored but present, sit the person upright and keep them calm."),
];

const ENVIRONMENTAL: &[ProtocolLine] = &[
    ProtocolLine::Header("ENVIRONMENTAL PROTOCOL // BURN, CHEMICAL & GAS"),
    ProtocolLine::Step("Gas or smoke: move low, upwind, into open air before treating anything else."),
    ProtocolLine::Step("Cool a burn under cool running water for 20 minutes. No ice, no ointments, no butter."),
    ProtocolLine::Step("Brush dry chemicals off the skin before rinsing with water."),
    ProtocolLine::Step("Remove rings and tight clothing near the burn before it swells. Do not peel stuck fabric."),
    ProtocolLine::Step("Cover the burn loosely with the cleanest dry cloth available."),
];

const MATERNAL: &[ProtocolLine] = &[
    ProtocolLine::Header("MATERNAL & CHILD PROTOCOL"),
    ProtocolLine::Step("Move the mother to the quietest, warmest shelter available and keep her lying on her left side."),
    ProtocolLine::Step("If birth is underway, do not try to delay it. Use the cleanest surface and hands you can manage."),
    ProtocolLine::Step("Dry and wrap a newborn immediately, skin to skin against the mother."),
    ProtocolLine::Step("Children dehydrate faster than adults: small sips of safe water, often."),
    ProtocolLine::Step("Keep children within arm's reach and speak to them at eye level."),
];

const PSYCHOSOCIAL: &[ProtocolLine] = &[
    ProtocolLine::Header("PSYCHOSOCIAL PROTOCOL // ACUTE STRESS"),
    ProtocolLine::Step("Breathe with them: in for 4, hold for 4, out for 4. Repeat until the shaking eases."),
    ProtocolLine::Step("Ground them: name 5 things you can see, 4 you can touch, 3 you can hear."),
    ProtocolLine::Step("Use short, calm sentences. Say what is happening and what happens next."),
    ProtocolLine::Step("Give them one simple task. Purpose displaces panic."),
    ProtocolLine::Step("Do not leave a person in acute distress alone."),
];

const SANITATION: &[ProtocolLine] = &[
    ProtocolLine::Header("SANITATION PROTOCOL // WATER & DISEASE"),
    ProtocolLine::Step("Drink only water that has been boiled for 1 minute at a rolling boil, or disinfected."),
    ProtocolLine::Step("For diarrhea, mix oral rehydration: 6 level teaspoons sugar, half a teaspoon salt, 1 litre safe water."),
    ProtocolLine::Step("Keep all waste at least 30 meters from any water source."),
    ProtocolLine::Step("Wash hands before touching food or wounds, even if water is short."),
    ProtocolLine::Step("Fever with rash or bloody diarrhea must be reported to the nearest medic point."),
];

const GENERAL: &[ProtocolLine] = &[
    ProtocolLine::Step("Stay calm, move away from visible hazards, and signal your position to responders. Describe the emergency in more detail for a targeted protocol."),
];

/// Look up the offline protocol for a category.
///
/// Total over the enum: an unregistered category cannot reach here.
pub fn protocol(category: Category) -> &'static [ProtocolLine] {
    match category {
        Category::Trauma => TRAUMA,
        Category::Orthopedic => ORTHOPEDIC,
        Category::Internal => INTERNAL,
        Category::Respiratory => RESPIRATORY,
        Category::Environmental => ENVIRONMENTAL,
        Category::Maternal => MATERNAL,
        Category::Psychosocial => PSYCHOSOCIAL,
        Category::Sanitation => SANITATION,
        Category::General => GENERAL,
    }
}

/// Render a protocol into a single display block.
///
/// Headers pass through as-is; steps are numbered in catalog order.
pub fn render(lines: &[ProtocolLine]) -> String {
    let mut out = String::new();
    let mut step = 0;
    for line in lines {
        match line {
            ProtocolLine::Header(text) => {
                if !out.is_empty() {
                    out.push('\n');
                }
                out.push_str(text);
            }
            ProtocolLine::Step(text) => {
                step += 1;
                if !out.is_empty() {
                    out.push('\n');
                }
                out.push_str(&format!("{}. {}", step, text));
            }
        }
    }
    out
}
