//! Static catalog contents (prices in Ghana cedis)

use super::{Badge, Category, Product};

pub(super) static CATEGORIES: [Category; 4] = [
    Category {
        id: "cardionab",
        name: "CardioNab",
        slug: "cardionab",
        icon: "heart",
    },
    Category {
        id: "dianab",
        name: "DiaoNab",
        slug: "dianab",
        icon: "droplet",
    },
    Category {
        id: "prostanab",
        name: "ProstaNab",
        slug: "prostanab",
        icon: "shield",
    },
    Category {
        id: "nabdol",
        name: "Nabdol",
        slug: "nabdol",
        icon: "thermometer",
    },
];

macro_rules! image {
    ($photo:literal) => {
        concat!("https://images.unsplash.com/", $photo, "?w=400&h=400&fit=crop")
    };
}

pub(super) static PRODUCTS: [Product; 16] = [
    // CardioNab
    Product {
        id: 1,
        name: "CardioNab Heart Support Formula",
        category: "cardionab",
        category_name: "CardioNab",
        price: 690.0,
        original_price: Some(899.0),
        rating: 4.8,
        reviews: 156,
        badge: Some(Badge::Sale),
        image: image!("photo-1550572017-edd951b55104"),
        description: "Advanced cardiovascular support formula with natural herbs known for heart health benefits.",
        short_description: "Heart health support with natural herbs",
        ingredients: &["Hawthorn", "Garlic Extract", "CoQ10", "Omega-3"],
        dosage: "Take 2 capsules daily with meals",
        stock: 50,
    },
    Product {
        id: 2,
        name: "CardioNab Blood Pressure Balance",
        category: "cardionab",
        category_name: "CardioNab",
        price: 599.0,
        original_price: None,
        rating: 4.6,
        reviews: 89,
        badge: Some(Badge::New),
        image: image!("photo-1584308666744-24d5c474f2ae"),
        description: "Natural blend to help maintain healthy blood pressure levels.",
        short_description: "Maintain healthy blood pressure naturally",
        ingredients: &["Hibiscus", "Olive Leaf", "Garlic", "Magnesium"],
        dosage: "Take 1 capsule twice daily",
        stock: 35,
    },
    Product {
        id: 3,
        name: "CardioNab Cholesterol Support",
        category: "cardionab",
        category_name: "CardioNab",
        price: 795.0,
        original_price: Some(975.0),
        rating: 4.7,
        reviews: 124,
        badge: Some(Badge::Sale),
        image: image!("photo-1628595351029-c2bf17511435"),
        description: "Plant-based formula to support healthy cholesterol levels.",
        short_description: "Support healthy cholesterol levels",
        ingredients: &["Red Yeast Rice", "Plant Sterols", "Artichoke Extract"],
        dosage: "Take 2 capsules daily",
        stock: 42,
    },
    Product {
        id: 4,
        name: "CardioNab Circulatory Boost",
        category: "cardionab",
        category_name: "CardioNab",
        price: 525.0,
        original_price: None,
        rating: 4.5,
        reviews: 67,
        badge: None,
        image: image!("photo-1576091160399-112ba8d25d1d"),
        description: "Enhance circulation and blood flow with this powerful herbal blend.",
        short_description: "Enhance circulation and blood flow",
        ingredients: &["Ginkgo Biloba", "Horse Chestnut", "Vitamin E"],
        dosage: "Take 1 capsule twice daily",
        stock: 28,
    },
    // DiaoNab
    Product {
        id: 5,
        name: "DiaoNab Blood Sugar Balance",
        category: "dianab",
        category_name: "DiaoNab",
        price: 720.0,
        original_price: Some(869.0),
        rating: 4.9,
        reviews: 203,
        badge: Some(Badge::Sale),
        image: image!("photo-1587854692152-cbe660dbde88"),
        description: "Natural support for healthy blood sugar management.",
        short_description: "Natural blood sugar management support",
        ingredients: &["Gymnema", "Bitter Melon", "Cinnamon", "Chromium"],
        dosage: "Take 2 capsules with meals",
        stock: 65,
    },
    Product {
        id: 6,
        name: "DiaoNab Metabolic Support",
        category: "dianab",
        category_name: "DiaoNab",
        price: 645.0,
        original_price: None,
        rating: 4.7,
        reviews: 145,
        badge: Some(Badge::New),
        image: image!("photo-1601784551446-20c9e07cdbdb"),
        description: "Support healthy metabolism and energy levels.",
        short_description: "Support healthy metabolism",
        ingredients: &["Green Tea", "CLA", "L-Carnitine", "B-Complex"],
        dosage: "Take 1 capsule twice daily",
        stock: 48,
    },
    Product {
        id: 7,
        name: "DiaoNab Insulin Sensitivity",
        category: "dianab",
        category_name: "DiaoNab",
        price: 840.0,
        original_price: Some(1019.0),
        rating: 4.8,
        reviews: 98,
        badge: Some(Badge::Sale),
        image: image!("photo-1515377905703-c4788e51af15"),
        description: "Advanced formula for improved insulin sensitivity.",
        short_description: "Improve insulin sensitivity naturally",
        ingredients: &["Berberine", "Alpha Lipoic Acid", "Magnesium", "Zinc"],
        dosage: "Take 2 capsules daily",
        stock: 32,
    },
    Product {
        id: 8,
        name: "DiaoNab Pancreatic Health",
        category: "dianab",
        category_name: "DiaoNab",
        price: 585.0,
        original_price: None,
        rating: 4.6,
        reviews: 76,
        badge: None,
        image: image!("photo-1559757175-5700dde675bc"),
        description: "Support pancreatic function with this herbal formula.",
        short_description: "Support healthy pancreatic function",
        ingredients: &["Turmeric", "Milk Thistle", "Dandelion Root"],
        dosage: "Take 1 capsule three times daily",
        stock: 40,
    },
    // ProstaNab
    Product {
        id: 9,
        name: "ProstaNab Prostate Health Complex",
        category: "prostanab",
        category_name: "ProstaNab",
        price: 750.0,
        original_price: Some(899.0),
        rating: 4.8,
        reviews: 187,
        badge: Some(Badge::Sale),
        image: image!("photo-1551601651-2a8555f1a136"),
        description: "Comprehensive prostate support with clinically studied herbs.",
        short_description: "Complete prostate health support",
        ingredients: &["Saw Palmetto", "Stinging Nettle", "Beta-Sitosterol", "Zinc"],
        dosage: "Take 2 capsules daily",
        stock: 55,
    },
    Product {
        id: 10,
        name: "ProstaNab Urinary Tract Support",
        category: "prostanab",
        category_name: "ProstaNab",
        price: 540.0,
        original_price: None,
        rating: 4.5,
        reviews: 92,
        badge: Some(Badge::New),
        image: image!("photo-1555221842-9098a729823a"),
        description: "Support urinary tract health and function.",
        short_description: "Urinary tract health support",
        ingredients: &["Cranberry", "Uva Ursi", "D-Mannose", "Buchu"],
        dosage: "Take 1 capsule twice daily",
        stock: 45,
    },
    Product {
        id: 11,
        name: "ProstaNab Hormonal Balance",
        category: "prostanab",
        category_name: "ProstaNab",
        price: 675.0,
        original_price: Some(825.0),
        rating: 4.7,
        reviews: 134,
        badge: Some(Badge::Sale),
        image: image!("photo-1573497019940-1c28c88b4f3e"),
        description: "Natural hormonal balance support for men.",
        short_description: "Natural hormonal balance for men",
        ingredients: &["Ashwagandha", "Maca Root", "Tribulus", "DIM"],
        dosage: "Take 1 capsule twice daily",
        stock: 38,
    },
    Product {
        id: 12,
        name: "ProstaNab Inflammation Response",
        category: "prostanab",
        category_name: "ProstaNab",
        price: 599.0,
        original_price: None,
        rating: 4.6,
        reviews: 78,
        badge: None,
        image: image!("photo-1607619056574-7b8d3ee536b2"),
        description: "Support healthy inflammatory response.",
        short_description: "Support healthy inflammation response",
        ingredients: &["Curcumin", "Boswellia", "Quercetin", "Bromelain"],
        dosage: "Take 1 capsule twice daily with food",
        stock: 52,
    },
    // Nabdol
    Product {
        id: 13,
        name: "Nabdol Pain Relief Complex",
        category: "nabdol",
        category_name: "Nabdol",
        price: 495.0,
        original_price: Some(645.0),
        rating: 4.9,
        reviews: 245,
        badge: Some(Badge::Sale),
        image: image!("photo-1550572017-4e6c8c9f8e0c"),
        description: "Natural pain relief with anti-inflammatory herbs.",
        short_description: "Natural pain relief and comfort",
        ingredients: &["Turmeric", "Ginger", "Devils Claw", "Boswellia"],
        dosage: "Take 2 capsules twice daily",
        stock: 72,
    },
    Product {
        id: 14,
        name: "Nabdol Joint Support",
        category: "nabdol",
        category_name: "Nabdol",
        price: 825.0,
        original_price: Some(975.0),
        rating: 4.8,
        reviews: 198,
        badge: Some(Badge::Sale),
        image: image!("photo-1512621776951-a57141f2eefd"),
        description: "Advanced joint health formula for mobility and comfort.",
        short_description: "Advanced joint health and mobility",
        ingredients: &["Glucosamine", "Chondroitin", "MSM", "Collagen"],
        dosage: "Take 3 capsules daily",
        stock: 48,
    },
    Product {
        id: 15,
        name: "Nabdol Muscle Recovery",
        category: "nabdol",
        category_name: "Nabdol",
        price: 555.0,
        original_price: None,
        rating: 4.7,
        reviews: 167,
        badge: Some(Badge::New),
        image: image!("photo-1571019614242-c5c5dee9f50b"),
        description: "Fast muscle recovery and reduced soreness.",
        short_description: "Fast muscle recovery formula",
        ingredients: &["Tart Cherry", "BCAAs", "Magnesium", "Vitamin D"],
        dosage: "Take 2 capsules after workout",
        stock: 55,
    },
    Product {
        id: 16,
        name: "Nabdol Anti-Stress Formula",
        category: "nabdol",
        category_name: "Nabdol",
        price: 450.0,
        original_price: None,
        rating: 4.6,
        reviews: 112,
        badge: None,
        image: image!("photo-1505576391880-b3f9d713dc4f"),
        description: "Natural stress and anxiety relief support.",
        short_description: "Natural stress and anxiety relief",
        ingredients: &["Ashwagandha", "L-Theanine", "Magnesium", "Lavender"],
        dosage: "Take 1 capsule twice daily",
        stock: 60,
    },
];
