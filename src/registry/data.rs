//! Built-in registry contents for India.

/// (code, name, lon, lat, total districts)
pub(super) const STATES: &[(&str, &str, f64, f64, u32)] = &[
    ("AN", "Andaman and Nicobar Islands", 92.6586, 11.7401, 3),
    ("AP", "Andhra Pradesh", 79.7400, 15.9129, 13),
    ("AR", "Arunachal Pradesh", 94.7278, 28.2180, 25),
    ("AS", "Assam", 92.9376, 26.2006, 35),
    ("BR", "Bihar", 85.3131, 25.0961, 38),
    ("CH", "Chandigarh", 76.7794, 30.7333, 1),
    ("CT", "Chhattisgarh", 81.8661, 21.2787, 33),
    ("DL", "Delhi", 77.1025, 28.7041, 11),
    ("GA", "Goa", 74.1240, 15.2993, 2),
    ("GJ", "Gujarat", 71.1924, 22.2587, 33),
    ("HR", "Haryana", 76.0856, 29.0588, 22),
    ("HP", "Himachal Pradesh", 77.1734, 31.1048, 12),
    ("JK", "Jammu and Kashmir", 74.7973, 33.7782, 20),
    ("JH", "Jharkhand", 85.2799, 23.6102, 24),
    ("KA", "Karnataka", 75.7139, 15.3173, 31),
    ("KL", "Kerala", 76.2711, 10.8505, 14),
    ("LA", "Ladakh", 77.5771, 34.1526, 2),
    ("MP", "Madhya Pradesh", 78.6569, 22.9734, 55),
    ("MH", "Maharashtra", 75.7139, 19.7515, 36),
    ("MN", "Manipur", 93.9063, 24.6637, 16),
    ("ML", "Meghalaya", 91.3662, 25.4670, 12),
    ("MZ", "Mizoram", 92.9376, 23.1645, 11),
    ("NL", "Nagaland", 94.5624, 26.1584, 16),
    ("OR", "Odisha", 85.0985, 20.9517, 30),
    ("PB", "Punjab", 75.3412, 31.1471, 23),
    ("RJ", "Rajasthan", 74.2179, 27.0238, 33),
    ("SK", "Sikkim", 88.5122, 27.5330, 6),
    ("TN", "Tamil Nadu", 78.6569, 11.1271, 38),
    ("TG", "Telangana", 79.0193, 18.1124, 33),
    ("TR", "Tripura", 91.9882, 23.9408, 8),
    ("UP", "Uttar Pradesh", 80.9462, 26.8467, 75),
    ("UK", "Uttarakhand", 79.0193, 30.0668, 13),
    ("WB", "West Bengal", 87.8550, 22.9868, 23),
];

/// (id, name, state, state code, lon, lat)
pub(super) const DISTRICTS: &[(&str, &str, &str, &str, f64, f64)] = &[
    ("AR-TAWANG", "Tawang", "Arunachal Pradesh", "AR", 91.8587, 27.5861),
    ("NL-KIPHIRE", "Kiphire", "Nagaland", "NL", 94.9682, 25.8819),
    ("MN-CHURACHANDPUR", "Churachandpur", "Manipur", "MN", 93.6747, 24.3327),
    ("ML-WESTGARO", "West Garo Hills", "Meghalaya", "ML", 90.2175, 25.5131),
    ("LA-LEH", "Leh", "Ladakh", "LA", 77.5771, 34.1526),
    ("MZ-CHAMPHAI", "Champhai", "Mizoram", "MZ", 93.3260, 23.4567),
    ("JK-KUPWARA", "Kupwara", "Jammu and Kashmir", "JK", 74.2663, 34.5267),
    ("JH-GUMLA", "Gumla", "Jharkhand", "JH", 84.5423, 23.0433),
    ("OR-MALKANGIRI", "Malkangiri", "Odisha", "OR", 81.8867, 18.3507),
    ("CT-BIJAPUR", "Bijapur", "Chhattisgarh", "CT", 80.8287, 18.8387),
    ("DL-SOUTH", "South Delhi", "Delhi", "DL", 77.2090, 28.5355),
    ("TG-HYDERABAD", "Hyderabad", "Telangana", "TG", 78.4867, 17.3850),
    ("KA-BANGALORE", "Bangalore Urban", "Karnataka", "KA", 77.5946, 12.9716),
    ("MH-MUMBAI", "Mumbai Suburban", "Maharashtra", "MH", 72.8777, 19.0760),
    ("TN-CHENNAI", "Chennai", "Tamil Nadu", "TN", 80.2707, 13.0827),
    ("KL-ERNAKULAM", "Ernakulam", "Kerala", "KL", 76.2673, 9.9312),
    ("UP-LUCKNOW", "Lucknow", "Uttar Pradesh", "UP", 80.9462, 26.8467),
    ("RJ-JAIPUR", "Jaipur", "Rajasthan", "RJ", 75.7873, 26.9124),
    ("GJ-AHMEDABAD", "Ahmedabad", "Gujarat", "GJ", 72.5714, 23.0225),
    ("WB-KOLKATA", "Kolkata", "West Bengal", "WB", 88.3639, 22.5726),
    ("BR-PATNA", "Patna", "Bihar", "BR", 85.1376, 25.5941),
    ("MH-PUNE", "Pune", "Maharashtra", "MH", 73.8567, 18.5204),
    ("MH-NAGPUR", "Nagpur", "Maharashtra", "MH", 79.0882, 21.1458),
    ("MH-THANE", "Thane", "Maharashtra", "MH", 72.9781, 19.2183),
    ("MH-NASHIK", "Nashik", "Maharashtra", "MH", 73.7898, 19.9975),
    ("MP-INDORE", "Indore", "Madhya Pradesh", "MP", 75.8577, 22.7196),
    ("MP-BHOPAL", "Bhopal", "Madhya Pradesh", "MP", 77.4126, 23.2599),
    ("MP-GWALIOR", "Gwalior", "Madhya Pradesh", "MP", 78.1828, 26.2183),
    ("MP-JABALPUR", "Jabalpur", "Madhya Pradesh", "MP", 79.9199, 23.1815),
    ("GJ-SURAT", "Surat", "Gujarat", "GJ", 72.8311, 21.1702),
    ("GJ-VADODARA", "Vadodara", "Gujarat", "GJ", 73.1812, 22.3072),
    ("GJ-RAJKOT", "Rajkot", "Gujarat", "GJ", 70.8022, 22.3039),
    ("PB-LUDHIANA", "Ludhiana", "Punjab", "PB", 75.8573, 30.9010),
    ("PB-AMRITSAR", "Amritsar", "Punjab", "PB", 74.8723, 31.6340),
    ("PB-JALANDHAR", "Jalandhar", "Punjab", "PB", 75.5762, 31.3260),
    ("AP-VISAKHAPATNAM", "Visakhapatnam", "Andhra Pradesh", "AP", 83.2185, 17.6868),
    ("AP-VIJAYAWADA", "Vijayawada", "Andhra Pradesh", "AP", 80.6480, 16.5062),
    ("AP-GUNTUR", "Guntur", "Andhra Pradesh", "AP", 80.4365, 16.3067),
    ("TN-COIMBATORE", "Coimbatore", "Tamil Nadu", "TN", 76.9558, 11.0168),
    ("TN-MADURAI", "Madurai", "Tamil Nadu", "TN", 78.1198, 9.9252),
    ("TN-TIRUCHIRAPPALLI", "Tiruchirappalli", "Tamil Nadu", "TN", 78.7047, 10.7905),
    ("UP-KANPUR", "Kanpur", "Uttar Pradesh", "UP", 80.3319, 26.4499),
    ("UP-GHAZIABAD", "Ghaziabad", "Uttar Pradesh", "UP", 77.4538, 28.6692),
    ("UP-AGRA", "Agra", "Uttar Pradesh", "UP", 78.0081, 27.1767),
    ("UP-VARANASI", "Varanasi", "Uttar Pradesh", "UP", 82.9739, 25.3176),
    ("UP-MEERUT", "Meerut", "Uttar Pradesh", "UP", 77.7064, 28.9845),
    ("UP-PRAYAGRAJ", "Prayagraj", "Uttar Pradesh", "UP", 81.8463, 25.4358),
    ("JH-RANCHI", "Ranchi", "Jharkhand", "JH", 85.3096, 23.3441),
    ("JH-JAMSHEDPUR", "Jamshedpur", "Jharkhand", "JH", 86.2029, 22.8046),
    ("JH-DHANBAD", "Dhanbad", "Jharkhand", "JH", 86.4304, 23.7957),
    ("CT-RAIPUR", "Raipur", "Chhattisgarh", "CT", 81.6296, 21.2514),
    ("CT-BHILAI", "Bhilai", "Chhattisgarh", "CT", 81.3800, 21.1938),
];
