mod hash;
mod params;
