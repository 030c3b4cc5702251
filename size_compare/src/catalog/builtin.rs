//! Bundled body data
//!
//! Radii are in Earth radii; bodies only known by their size in km go
//! through `km_to_earth_radii`.

use common::constants::km_to_earth_radii;

use super::{BodyDetails, BodyKind, CelestialBody};
use crate::color::Rgb;

const LIGHT_YEAR_KM: f64 = 9.4607e12;

pub(super) fn bodies() -> Vec<CelestialBody> {
    let mut bodies = Vec::with_capacity(40);

    // The Sun
    bodies.push(
        CelestialBody::new("sun", "Sun", BodyKind::Star, 109.0, Rgb::from_hex(0xFDB813))
            .with_description("Our star")
            .with_details(BodyDetails::new(
                "G-type main-sequence star",
                "1.989 × 10³⁰ kg",
                "5,778 K (surface)",
                "4.6 billion years",
                "73% hydrogen, 25% helium",
                &[
                    "Contains 99.86% of the Solar System's mass",
                    "Could fit 1.3 million Earths inside it",
                    "Surface gravity is 28 times stronger than Earth's",
                    "Nuclear fusion converts 600 million tons of hydrogen to helium every second",
                ],
            )),
    );

    push_planets(&mut bodies);
    push_moons(&mut bodies);
    push_small_bodies(&mut bodies);
    push_stars(&mut bodies);
    push_extreme_objects(&mut bodies);

    bodies
}

fn push_planets(bodies: &mut Vec<CelestialBody>) {
    bodies.push(
        CelestialBody::new("mercury", "Mercury", BodyKind::Planet, 0.383, Rgb::from_hex(0x8C7853))
            .with_description("Closest to Sun")
            .with_image("preview-mercury.png")
            .with_details(BodyDetails::new(
                "Terrestrial planet",
                "3.301 × 10²³ kg",
                "427°C (day), -173°C (night)",
                "4.5 billion years",
                "Large iron core, thin silicate mantle",
                &[
                    "Has the most eccentric orbit of all planets",
                    "One day on Mercury lasts 176 Earth days",
                    "No atmosphere to retain heat",
                    "Has water ice in permanently shadowed craters",
                ],
            )),
    );

    bodies.push(
        CelestialBody::new("venus", "Venus", BodyKind::Planet, 0.949, Rgb::from_hex(0xFFC649))
            .with_description("Hottest planet")
            .with_image("preview-venus.png")
            .with_details(BodyDetails::new(
                "Terrestrial planet",
                "4.867 × 10²⁴ kg",
                "462°C (surface)",
                "4.5 billion years",
                "96.5% CO₂ atmosphere, sulfuric acid clouds",
                &[
                    "Hottest planet in the solar system",
                    "Rotates backwards (retrograde rotation)",
                    "Atmospheric pressure 92 times that of Earth",
                    "Often called Earth's 'evil twin'",
                ],
            )),
    );

    bodies.push(
        CelestialBody::new("earth", "Earth", BodyKind::Planet, 1.0, Rgb::from_hex(0x6B93D6))
            .with_description("Our home planet")
            .with_image("preview-earth.png")
            .with_details(BodyDetails::new(
                "Terrestrial planet",
                "5.972 × 10²⁴ kg",
                "15°C (average)",
                "4.54 billion years",
                "78% nitrogen, 21% oxygen atmosphere",
                &[
                    "Only known planet with life",
                    "71% of surface covered by water",
                    "Has one natural satellite (the Moon)",
                    "Magnetic field protects from solar radiation",
                ],
            )),
    );

    bodies.push(
        CelestialBody::new("mars", "Mars", BodyKind::Planet, 0.532, Rgb::from_hex(0xCD5C5C))
            .with_description("The red planet")
            .with_image("preview-mars.png")
            .with_details(BodyDetails::new(
                "Terrestrial planet",
                "6.417 × 10²³ kg",
                "-65°C (average)",
                "4.5 billion years",
                "Iron oxide (rust) gives red color",
                &[
                    "Has the largest volcano in the solar system (Olympus Mons)",
                    "Day length similar to Earth (24h 37m)",
                    "Has polar ice caps made of water and CO₂",
                    "Evidence suggests it once had liquid water",
                ],
            )),
    );

    bodies.push(
        CelestialBody::new("jupiter", "Jupiter", BodyKind::Planet, 11.21, Rgb::from_hex(0xD8CA9D))
            .with_description("Largest planet")
            .with_image("preview-jupiter.png")
            .with_details(BodyDetails::new(
                "Gas giant",
                "1.898 × 10²⁷ kg",
                "-110°C (cloud tops)",
                "4.5 billion years",
                "89% hydrogen, 10% helium",
                &[
                    "Has over 80 known moons",
                    "Great Red Spot is a storm larger than Earth",
                    "Acts as a 'cosmic vacuum cleaner' protecting inner planets",
                    "Has faint rings discovered in 1979",
                ],
            )),
    );

    bodies.push(
        CelestialBody::new("saturn", "Saturn", BodyKind::Planet, 9.45, Rgb::from_hex(0xFAD5A5))
            .with_description("Has prominent rings")
            .with_image("preview-saturn.png")
            .with_details(BodyDetails::new(
                "Gas giant",
                "5.683 × 10²⁶ kg",
                "-140°C (cloud tops)",
                "4.5 billion years",
                "96% hydrogen, 3% helium",
                &[
                    "Less dense than water - would float!",
                    "Ring system spans 282,000 km but only 10m thick",
                    "Has 146 confirmed moons including Titan",
                    "Hexagonal storm at north pole",
                ],
            )),
    );

    bodies.push(
        CelestialBody::new("uranus", "Uranus", BodyKind::Planet, 4.01, Rgb::from_hex(0x4FD0E7))
            .with_description("Ice giant")
            .with_image("preview-uranus.png")
            .with_details(BodyDetails::new(
                "Ice giant",
                "8.681 × 10²⁵ kg",
                "-195°C",
                "4.5 billion years",
                "Water, methane, and ammonia ices",
                &[
                    "Rotates on its side (98° axial tilt)",
                    "Has faint rings discovered in 1977",
                    "Coldest planetary atmosphere in solar system",
                    "Takes 84 Earth years to orbit the Sun",
                ],
            )),
    );

    bodies.push(
        CelestialBody::new("neptune", "Neptune", BodyKind::Planet, 3.88, Rgb::from_hex(0x4B70DD))
            .with_description("Windiest planet")
            .with_image("preview-neptune.png")
            .with_details(BodyDetails::new(
                "Ice giant",
                "1.024 × 10²⁶ kg",
                "-200°C",
                "4.5 billion years",
                "Water, methane, and ammonia ices",
                &[
                    "Fastest winds in solar system (2,100 km/h)",
                    "Takes 165 Earth years to complete one orbit",
                    "Has 16 known moons including Triton",
                    "Deep blue color from methane in atmosphere",
                ],
            )),
    );
}

fn push_moons(bodies: &mut Vec<CelestialBody>) {
    bodies.push(
        CelestialBody::new("moon", "Moon", BodyKind::Moon, 0.273, Rgb::from_hex(0xC0C0C0))
            .with_description("Earth's satellite")
            .with_details(BodyDetails::new(
                "Natural satellite",
                "7.342 × 10²² kg",
                "127°C (day), -173°C (night)",
                "4.5 billion years",
                "Rocky body with small iron core",
                &[
                    "Formed from debris after Mars-sized object hit Earth",
                    "Same side always faces Earth (tidally locked)",
                    "Causes Earth's tides through gravitational pull",
                    "Gradually moving away from Earth (3.8 cm/year)",
                ],
            )),
    );

    bodies.push(
        CelestialBody::new("io", "Io", BodyKind::Moon, km_to_earth_radii(1821.0), Rgb::from_hex(0xE5D15A))
            .with_description("Volcanic moon of Jupiter")
            .with_details(BodyDetails::new(
                "Natural satellite",
                "8.93 × 10²² kg",
                "-143°C (average surface)",
                "4.5 billion years",
                "Silicate rock with an iron core, sulfur surface",
                &[
                    "Most volcanically active body in the solar system",
                    "Tidal heating from Jupiter drives its volcanoes",
                    "Volcanic plumes rise up to 500 km",
                    "Innermost of the four Galilean moons",
                ],
            )),
    );

    bodies.push(
        CelestialBody::new("europa", "Europa", BodyKind::Moon, km_to_earth_radii(1560.0), Rgb::from_hex(0xC8B89A))
            .with_description("Icy moon of Jupiter")
            .with_details(BodyDetails::new(
                "Natural satellite",
                "4.80 × 10²² kg",
                "-160°C (equator)",
                "4.5 billion years",
                "Water-ice crust over a salty ocean",
                &[
                    "Likely hides a global ocean beneath its ice",
                    "Smoothest surface of any solid body in the solar system",
                    "Considered one of the best places to search for life",
                    "Slightly smaller than Earth's Moon",
                ],
            )),
    );

    bodies.push(
        CelestialBody::new("ganymede", "Ganymede", BodyKind::Moon, km_to_earth_radii(2634.0), Rgb::from_hex(0x9C8F80))
            .with_description("Largest moon")
            .with_details(BodyDetails::new(
                "Natural satellite",
                "1.48 × 10²³ kg",
                "-163°C",
                "4.5 billion years",
                "Rock and water ice, iron core",
                &[
                    "Largest moon in the solar system",
                    "Larger than the planet Mercury",
                    "Only moon known to have its own magnetic field",
                    "May have a subsurface saltwater ocean",
                ],
            )),
    );

    bodies.push(
        CelestialBody::new("titan", "Titan", BodyKind::Moon, km_to_earth_radii(2576.0), Rgb::from_hex(0xD9A54A))
            .with_description("Hazy moon of Saturn")
            .with_details(BodyDetails::new(
                "Natural satellite",
                "1.35 × 10²³ kg",
                "-179°C",
                "4.5 billion years",
                "Nitrogen atmosphere, water-ice crust",
                &[
                    "Only moon with a thick atmosphere",
                    "Has lakes and seas of liquid methane and ethane",
                    "Larger than the planet Mercury",
                    "Huygens probe landed on its surface in 2005",
                ],
            )),
    );

    bodies.push(
        CelestialBody::new("phobos", "Phobos", BodyKind::Moon, 0.0018, Rgb::from_hex(0x8B4513))
            .with_description("Mars' largest moon")
            .with_details(BodyDetails::new(
                "Natural satellite",
                "1.08 × 10¹⁶ kg",
                "-40°C to -112°C",
                "4.5 billion years",
                "Carbon-rich rock",
                &[
                    "Orbits Mars in just 7.6 hours",
                    "Getting closer to Mars and will crash in ~50 million years",
                    "Potato-shaped with large crater Stickney",
                    "May be captured asteroid",
                ],
            )),
    );

    bodies.push(
        CelestialBody::new("deimos", "Deimos", BodyKind::Moon, 0.00098, Rgb::from_hex(0xA0522D))
            .with_description("Mars' smaller moon")
            .with_details(BodyDetails::new(
                "Natural satellite",
                "1.8 × 10¹⁵ kg",
                "-40°C to -112°C",
                "4.5 billion years",
                "Carbon-rich rock",
                &[
                    "Smallest known moon in solar system",
                    "Orbits Mars in 30.3 hours",
                    "Gradually moving away from Mars",
                    "Named after Greek god of dread",
                ],
            )),
    );
}

fn push_small_bodies(bodies: &mut Vec<CelestialBody>) {
    bodies.push(
        CelestialBody::new("ceres", "Ceres", BodyKind::DwarfPlanet, 0.074, Rgb::from_hex(0x8C7853))
            .with_description("Largest asteroid")
            .with_details(BodyDetails::new(
                "Dwarf planet",
                "9.1 × 10²⁰ kg",
                "-105°C",
                "4.5 billion years",
                "Rock and ice",
                &[
                    "Largest object in asteroid belt",
                    "Contains about 1/3 of asteroid belt's mass",
                    "Has water vapor plumes",
                    "First asteroid discovered (1801)",
                ],
            )),
    );

    bodies.push(
        CelestialBody::new("pluto", "Pluto", BodyKind::DwarfPlanet, km_to_earth_radii(1188.0), Rgb::from_hex(0xC9B29B))
            .with_description("Former ninth planet")
            .with_image("preview-pluto.png")
            .with_details(BodyDetails::new(
                "Dwarf planet",
                "1.303 × 10²² kg",
                "-229°C (average)",
                "4.5 billion years",
                "Rock and nitrogen ice",
                &[
                    "Reclassified as a dwarf planet in 2006",
                    "Has a heart-shaped nitrogen glacier (Tombaugh Regio)",
                    "Its largest moon Charon is half its size",
                    "Visited by New Horizons in 2015",
                ],
            )),
    );

    bodies.push(
        CelestialBody::new("eris", "Eris", BodyKind::DwarfPlanet, km_to_earth_radii(1163.0), Rgb::from_hex(0xE8E8E8))
            .with_description("Most massive dwarf planet")
            .with_details(BodyDetails::new(
                "Dwarf planet",
                "1.66 × 10²² kg",
                "-231°C",
                "4.5 billion years",
                "Rock and methane ice",
                &[
                    "Most massive known dwarf planet",
                    "Its discovery led to Pluto's reclassification",
                    "Takes about 559 years to orbit the Sun",
                    "Has one known moon, Dysnomia",
                ],
            )),
    );

    bodies.push(
        CelestialBody::new("haumea", "Haumea", BodyKind::DwarfPlanet, km_to_earth_radii(816.0), Rgb::from_hex(0xD9D4CC))
            .with_description("Fast-spinning dwarf planet")
            .with_details(BodyDetails::new(
                "Dwarf planet",
                "4.01 × 10²¹ kg",
                "-241°C",
                "4.5 billion years",
                "Rock with a crystalline water-ice surface",
                &[
                    "Elongated egg shape from its rapid spin",
                    "One day lasts only about 4 hours",
                    "Has a ring, discovered in 2017",
                    "Has two known moons, Hiʻiaka and Namaka",
                ],
            )),
    );

    bodies.push(
        CelestialBody::new("makemake", "Makemake", BodyKind::DwarfPlanet, km_to_earth_radii(715.0), Rgb::from_hex(0xB07D5B))
            .with_description("Kuiper belt dwarf planet")
            .with_details(BodyDetails::new(
                "Dwarf planet",
                "3.1 × 10²¹ kg",
                "-239°C",
                "4.5 billion years",
                "Rock with methane and ethane ices",
                &[
                    "Named after the creator god of Rapa Nui",
                    "Second-brightest object in the Kuiper belt",
                    "Reddish-brown surface from tholins",
                    "Has one known moon, nicknamed MK2",
                ],
            )),
    );

    bodies.push(
        CelestialBody::new("vesta", "Vesta", BodyKind::Asteroid, 0.041, Rgb::from_hex(0xA0A0A0))
            .with_description("Bright asteroid")
            .with_details(BodyDetails::new(
                "Asteroid",
                "2.59 × 10²⁰ kg",
                "-60°C to -270°C",
                "4.5 billion years",
                "Rocky (basaltic surface)",
                &[
                    "Second most massive asteroid",
                    "Has a large crater from ancient impact",
                    "Brightest asteroid visible from Earth",
                    "Differentiated interior like terrestrial planets",
                ],
            )),
    );

    bodies.push(
        CelestialBody::new("pallas", "Pallas", BodyKind::Asteroid, km_to_earth_radii(256.0), Rgb::from_hex(0x8F8A80))
            .with_description("Steeply inclined asteroid")
            .with_details(BodyDetails::new(
                "Asteroid",
                "2.04 × 10²⁰ kg",
                "-109°C",
                "4.5 billion years",
                "Carbonaceous silicate rock",
                &[
                    "Third-largest object in the asteroid belt",
                    "Orbit is steeply inclined at about 35°",
                    "Second asteroid ever discovered (1802)",
                    "Named after the Greek goddess Pallas Athena",
                ],
            )),
    );

    bodies.push(
        CelestialBody::new("hygiea", "Hygiea", BodyKind::Asteroid, km_to_earth_radii(217.0), Rgb::from_hex(0x5E5A55))
            .with_description("Dark, nearly round asteroid")
            .with_details(BodyDetails::new(
                "Asteroid",
                "8.3 × 10¹⁹ kg",
                "-109°C",
                "4.5 billion years",
                "Carbonaceous rock",
                &[
                    "Fourth-largest object in the asteroid belt",
                    "Nearly spherical, a dwarf planet candidate",
                    "Very dark surface reflecting about 7% of light",
                    "Discovered in 1849",
                ],
            )),
    );

    bodies.push(
        CelestialBody::new("eros", "Eros", BodyKind::Asteroid, 0.0013, Rgb::from_hex(0x696969))
            .with_description("Near-Earth asteroid")
            .with_details(BodyDetails::new(
                "Near-Earth asteroid",
                "6.69 × 10¹⁵ kg",
                "-150°C",
                "4.5 billion years",
                "Silicate rock",
                &[
                    "Elongated shape (34 × 11 × 11 km)",
                    "First asteroid orbited by spacecraft",
                    "Rotates once every 5.27 hours",
                    "Could potentially impact Earth in distant future",
                ],
            )),
    );
}

fn push_stars(bodies: &mut Vec<CelestialBody>) {
    bodies.push(
        CelestialBody::new("sirius", "Sirius", BodyKind::Star, km_to_earth_radii(1_190_000.0), Rgb::from_hex(0xCAD7FF))
            .with_description("Brightest star in the night sky")
            .with_details(BodyDetails::new(
                "Main-sequence star (A1V)",
                "4.02 × 10³⁰ kg (2.02 solar masses)",
                "9,940 K",
                "230 million years",
                "Hydrogen, helium",
                &[
                    "Brightest star in the night sky",
                    "Only 8.6 light-years from Earth",
                    "Has a white dwarf companion, Sirius B",
                    "Known as the Dog Star",
                ],
            )),
    );

    bodies.push(
        CelestialBody::new("aldebaran", "Aldebaran", BodyKind::Star, 3100.0, Rgb::from_hex(0xFF8C00))
            .with_description("Orange giant star")
            .with_details(BodyDetails::new(
                "Orange giant star",
                "3.4 × 10³⁰ kg (1.7 solar masses)",
                "3,900 K",
                "6.4 billion years",
                "Hydrogen, helium, heavier elements",
                &[
                    "Brightest star in constellation Taurus",
                    "Often called 'Eye of the Bull'",
                    "Not actually part of Hyades cluster (just appears so)",
                    "Will eventually become a white dwarf",
                ],
            )),
    );

    bodies.push(
        CelestialBody::new("rigel", "Rigel", BodyKind::Star, 5400.0, Rgb::from_hex(0x87CEEB))
            .with_description("Blue supergiant star")
            .with_details(BodyDetails::new(
                "Blue supergiant star",
                "4.2 × 10³¹ kg (21 solar masses)",
                "12,100 K",
                "8 million years",
                "Hydrogen, helium (very hot and massive)",
                &[
                    "Brightest star in constellation Orion",
                    "40,000 times more luminous than the Sun",
                    "Despite being younger, will die before Betelgeuse",
                    "Actually a multiple star system",
                ],
            )),
    );

    bodies.push(
        CelestialBody::new("antares", "Antares", BodyKind::Star, 60200.0, Rgb::from_hex(0xDC143C))
            .with_description("Red supergiant star")
            .with_details(BodyDetails::new(
                "Red supergiant star",
                "2.4 × 10³¹ kg (12 solar masses)",
                "3,400 K",
                "11-15 million years",
                "Hydrogen, helium, carbon, oxygen",
                &[
                    "Name means 'rival of Mars' due to similar red color",
                    "If placed at Sun's position, would reach past Jupiter",
                    "Will end its life in a spectacular supernova",
                    "Has a blue-white companion star",
                ],
            )),
    );

    bodies.push(
        CelestialBody::new("betelgeuse", "Betelgeuse", BodyKind::Star, 76700.0, Rgb::from_hex(0xFF4500))
            .with_description("Red supergiant star")
            .with_details(BodyDetails::new(
                "Red supergiant star",
                "2.17 × 10³¹ kg (11 solar masses)",
                "3,500 K",
                "10 million years",
                "Hydrogen, helium, heavier elements",
                &[
                    "One of the largest known stars",
                    "Expected to explode as supernova within 100,000 years",
                    "If placed at center of solar system, would engulf Mars",
                    "Brightness varies dramatically over time",
                ],
            )),
    );

    bodies.push(
        CelestialBody::new("vy_canis_majoris", "VY Canis Majoris", BodyKind::Star, km_to_earth_radii(980_000_000.0), Rgb::from_hex(0xFF6A3D))
            .with_description("Red hypergiant star")
            .with_details(BodyDetails::new(
                "Red hypergiant star",
                "3.4 × 10³¹ kg (17 solar masses)",
                "3,490 K",
                "8.2 million years",
                "Hydrogen, helium, heavy elements, dusty envelope",
                &[
                    "One of the largest known stars",
                    "Surrounded by a vast nebula of ejected material",
                    "Loses mass at an enormous rate",
                    "Likely to end as a supernova or collapse into a black hole",
                ],
            )),
    );

    bodies.push(
        CelestialBody::new("uy_scuti", "UY Scuti", BodyKind::Star, km_to_earth_radii(1_188_000_000.0), Rgb::from_hex(0xFF5A36))
            .with_description("Red supergiant star")
            .with_details(BodyDetails::new(
                "Red supergiant star",
                "1.4 × 10³¹ kg (7 solar masses)",
                "3,365 K",
                "A few million years",
                "Hydrogen, helium, heavier elements",
                &[
                    "Among the largest known stars by radius",
                    "About 9,500 light-years away in Scutum",
                    "Would extend past Jupiter's orbit if placed at the Sun",
                    "A variable star that pulsates over about 740 days",
                ],
            )),
    );
}

fn push_extreme_objects(bodies: &mut Vec<CelestialBody>) {
    bodies.push(
        CelestialBody::new("neutron_star", "Neutron Star", BodyKind::StellarRemnant, 0.00094, Rgb::from_hex(0xE6E6FA))
            .with_description("Ultra-dense stellar remnant")
            .with_details(BodyDetails::new(
                "Neutron star",
                "2.8 × 10³⁰ kg (1.4 solar masses)",
                "1,000,000 K",
                "Varies (stellar remnant)",
                "Neutrons, protons, electrons",
                &[
                    "Teaspoon of neutron star material weighs 6 billion tons",
                    "Magnetic field trillion times stronger than Earth's",
                    "Can spin up to 700 times per second",
                    "Formed when massive star collapses",
                ],
            )),
    );

    bodies.push(
        CelestialBody::new("sagittarius_a", "Sagittarius A*", BodyKind::BlackHole, 1740.0, Rgb::from_hex(0x000000))
            .with_description("Supermassive black hole")
            .with_details(BodyDetails::new(
                "Supermassive black hole",
                "8.26 × 10³⁶ kg (4.1 million solar masses)",
                "Near absolute zero",
                "13+ billion years",
                "Singularity (unknown physics)",
                &[
                    "At center of our Milky Way galaxy",
                    "Event horizon shown here (point of no return)",
                    "Time dilation extreme near event horizon",
                    "First black hole ever photographed (2022)",
                ],
            )),
    );

    bodies.push(
        CelestialBody::new("ton_618", "TON 618", BodyKind::BlackHole, km_to_earth_radii(4.0e10), Rgb::from_hex(0x000000))
            .with_description("Ultramassive black hole")
            .with_details(BodyDetails::new(
                "Ultramassive black hole (quasar)",
                "1.3 × 10⁴¹ kg (66 billion solar masses)",
                "Unknown",
                "About 10.8 billion years (light travel time)",
                "Singularity surrounded by a luminous accretion disk",
                &[
                    "One of the most massive black holes known",
                    "Powers an extremely bright quasar",
                    "Located about 10.4 billion light-years away",
                    "Its event horizon is larger than the solar system",
                ],
            )),
    );

    bodies.push(
        CelestialBody::new("milky_way", "Milky Way", BodyKind::Galaxy, km_to_earth_radii(52_850.0 * LIGHT_YEAR_KM), Rgb::from_hex(0xBFC8FF))
            .with_description("Our home galaxy")
            .with_details(BodyDetails::new(
                "Barred spiral galaxy",
                "About 3 × 10⁴² kg (1.5 trillion solar masses)",
                "Varies",
                "13.6 billion years",
                "100 to 400 billion stars, gas, dust and dark matter",
                &[
                    "The Sun takes about 230 million years to orbit its center",
                    "Hosts the black hole Sagittarius A* at its core",
                    "Will merge with Andromeda in about 4.5 billion years",
                    "Its disk is only about 1,000 light-years thick",
                ],
            )),
    );

    bodies.push(
        CelestialBody::new("andromeda", "Andromeda", BodyKind::Galaxy, km_to_earth_radii(110_000.0 * LIGHT_YEAR_KM), Rgb::from_hex(0xD6C8FF))
            .with_description("Nearest large galaxy")
            .with_details(BodyDetails::new(
                "Barred spiral galaxy",
                "About 2.3 × 10⁴² kg (1.15 trillion solar masses)",
                "Varies",
                "About 10 billion years",
                "About one trillion stars, gas, dust and dark matter",
                &[
                    "Nearest large galaxy to the Milky Way",
                    "Visible to the naked eye from dark sites",
                    "About 2.5 million light-years away",
                    "Approaching us at about 110 km/s",
                ],
            )),
    );
}
