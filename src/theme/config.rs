//! Default `settings.conf` written on first run.

/// Commented skeleton listing every recognized key with its default value.
pub(crate) const SKELETON_SETTINGS_CONTENT: &str = "# newsdesk settings\n\
# Format: key = value, one per line. Lines starting with # or // are comments.\n\
\n\
# News API\n\
api_url = https://content.guardianapis.com/search\n\
api_key = test\n\
# query = climate\n\
# section = sport\n\
page_size = 20                 # 1..50\n\
order_by = newest              # newest | oldest | relevance\n\
refresh_interval_secs = 0      # 0 disables automatic refresh\n\
\n\
# Display\n\
date_style = iso               # iso (2020-05-01) | short (May 01, 2020)\n\
clock = 24h                    # 24h (14:30:00) | 12h (2:30 PM)\n\
unknown_date_label = unknown date\n\
\n\
# Section badge colors (#RRGGBB or R,G,B)\n\
color_sport = #2e86c1\n\
color_music = #b84592\n\
color_life_and_style = #e69f00\n\
color_books = #8e44ad\n\
color_business = #1f618d\n\
color_money = #117a65\n\
color_politics = #c0392b\n\
color_football = #27ae60\n\
color_media = #d35400\n\
color_stage = #7d3c98\n\
color_default = #7f8c8d\n";
