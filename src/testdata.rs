//! Shared fixtures for the statistical recovery tests.
//!
//! The recovery algorithms need genuine natural-language input: the Caesar
//! correlation needs a few hundred letters for the dot product to lock on,
//! and the coincidence scan needs over a thousand. One passage (lowercase
//! letters and spaces only, so every byte is either reference-alphabet
//! signal or a skipped separator) serves all of them.

/// Natural-language English sample, > 1400 characters.
pub(crate) const ENGLISH_SAMPLE: &str = "the evening fog rolled in from the harbor \
and settled over the narrow streets of the old town where the lamplighters were \
already making their rounds with long brass poles and patient steps the merchants \
pulled their shutters closed and counted the coins of the day while carts rattled \
home over the worn cobblestones a few gulls still wheeled above the quay crying \
into the grey air as the last fishing boats tied up along the pier the smell of \
salt and tar and woodsmoke drifted between the houses and gathered in the doorways \
where children lingered to watch the ships every window slowly filled with \
candlelight and the town seemed to breathe out after the long work of the \
afternoon down by the water an old keeper climbed the spiral stairs of the \
lighthouse and trimmed the wick with practiced hands for the night promised wind \
and heavy weather far out beyond the point the sea was turning from green to iron \
and the first cold drops began to fall on the roofs of the sleeping town yet \
inside the small taverns the talk was warm and easy full of old voyages and older \
storms and of harvests hauled from generous waters in the years when every net \
came up heavy and every sail returned home safe the fiddler in the corner took up \
a slow tune and the landlord stacked fresh wood on the fire while outside the \
rain grew steady and the harbor bell rang the hours across the water one by one \
until the lamps burned low and the town gave itself over to sleep";
