mod legalize_url;
mod split_multi;
