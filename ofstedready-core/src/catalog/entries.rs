//! Catalog data: one entry per content type schools publish online

use super::ContentTypeSpec;

pub(super) static ENTRIES: &[ContentTypeSpec] = &[
    ContentTypeSpec {
        id: "admission_arrangements",
        title: "Admission Arrangements",
        description: "Create comprehensive admission arrangements for parents, including how the school considers applications, published admission numbers, application process, and place allocation criteria.",
        key_sections: &[
            "Normal point of entry admissions",
            "Published admission numbers",
            "Application process",
            "Place allocation criteria",
            "Selective admission procedures",
            "Deferred entry requests",
        ],
        gov_requirement: "Must comply with School Information (England) Regulations 2008, as amended. Must be published by 15 March each year for September admissions.",
        quality_criteria: "Clear explanation of admission criteria, Specific details on application process, Transparent place allocation methods, Information on appeals process",
        statutory_reference: "School Information (England) Regulations 2008, School Admissions Code 2022",
    },
    ContentTypeSpec {
        id: "in_year_admissions",
        title: "In-Year Admissions",
        description: "Create information about managing in-year applications for places, including application forms and supplementary information requirements.",
        key_sections: &[
            "In-year application process",
            "Application form availability",
            "Supplementary information requirements",
            "Local authority coordination scheme",
        ],
        gov_requirement: "Must be published by 31 August each year. Must include application form if governing body manages applications.",
        quality_criteria: "Clear application timeline, Complete application requirements, Information on decision timelines, Appeals process details",
        statutory_reference: "School Information (England) Regulations 2008, School Admissions Code 2022",
    },
    ContentTypeSpec {
        id: "admission_appeals",
        title: "Admission Appeals",
        description: "Create a timetable for organizing and hearing admission appeals with all required deadlines and notice periods.",
        key_sections: &[
            "Appeal timetable",
            "Deadline for lodging appeals",
            "Evidence submission deadlines",
            "Appeal hearing notice period",
            "Decision notification timeline",
        ],
        gov_requirement: "Must be published by 28 February each year. Must include at least 20 school days for appeal preparation and 10 school days notice of hearing.",
        quality_criteria: "Comprehensive timeline, Clear deadlines, Adequate notice periods, Transparent decision process",
        statutory_reference: "School Admissions Appeals Code, School Standards and Framework Act 1998",
    },
    ContentTypeSpec {
        id: "curriculum",
        title: "Curriculum Information",
        description: "Create detailed information about the curriculum content for each academic year and subject, including religious education and accessibility plans.",
        key_sections: &[
            "Curriculum content by year and subject",
            "Religious education details",
            "Right to withdraw from RE",
            "Accessibility plan",
            "Curriculum enrichment opportunities",
        ],
        gov_requirement: "Must publish curriculum content for every subject in each academic year. Must include accessibility plan for disabled pupils.",
        quality_criteria: "Complete subject coverage, Year-by-year breakdown, RE specifics, Accessibility provisions, Parent engagement information",
        statutory_reference: "School Information (England) Regulations 2008, Equality Act 2010",
    },
    ContentTypeSpec {
        id: "phonics",
        title: "Phonics and Reading Schemes",
        description: "List the phonics and reading schemes used in the school for early years and key stage 1.",
        key_sections: &[
            "Phonics programmes used",
            "Reading schemes available",
            "Assessment methods",
            "Parent support resources",
        ],
        gov_requirement: "Required for schools with key stage 1 provision. Must list all phonics and reading schemes used.",
        quality_criteria: "Complete list of programmes, Implementation details, Assessment approach, Parent guidance",
        statutory_reference: "School Information (England) Regulations 2008, National Curriculum framework",
    },
    ContentTypeSpec {
        id: "ks4_courses",
        title: "Key Stage 4 Courses",
        description: "List all key stage 4 courses offered by the school, including GCSEs and other qualifications.",
        key_sections: &[
            "GCSE subjects offered",
            "Vocational qualifications",
            "BTEC courses",
            "Alternative qualifications",
            "Course selection guidance",
        ],
        gov_requirement: "Required for schools with key stage 4 provision. Must list all key stage 4 courses offered.",
        quality_criteria: "Complete course listing, Course descriptions, Assessment methods, Progression opportunities",
        statutory_reference: "School Information (England) Regulations 2008, National Curriculum framework",
    },
    ContentTypeSpec {
        id: "financial_info",
        title: "Financial Information",
        description: "Create financial information including high-earning staff counts and links to financial benchmarking service.",
        key_sections: &[
            "High-earning staff counts (by £10,000 bandings)",
            "Link to schools financial benchmarking service",
            "Financial transparency statement",
        ],
        gov_requirement: "Must publish number of employees earning over £100,000 in £10,000 bandings. Must include link to financial benchmarking service.",
        quality_criteria: "Accurate salary band reporting, Direct benchmarking link, Financial transparency",
        statutory_reference: "School Information (England) Regulations 2008, Academies Financial Handbook",
    },
    ContentTypeSpec {
        id: "governance",
        title: "Governance Information",
        description: "Create comprehensive information about the school's governing body, including structure, membership, and diversity data.",
        key_sections: &[
            "Governing body structure",
            "Governor appointments and terms",
            "Attendance records",
            "Business interests",
            "Diversity data",
            "Committee information",
        ],
        gov_requirement: "Must publish information about governing body constitution. Should publish diversity data and detailed governor information.",
        quality_criteria: "Complete governance structure, Transparent appointments, Attendance transparency, Interest declarations, Diversity reporting",
        statutory_reference: "Constitution of Governing Bodies of Maintained Schools Regulations 2012",
    },
    ContentTypeSpec {
        id: "pupil_premium",
        title: "Pupil Premium Strategy",
        description: "Create a strategy statement explaining how pupil premium funding is being spent and the impact on disadvantaged pupils.",
        key_sections: &[
            "Funding allocation",
            "Spending priorities",
            "Impact measurement",
            "Review timeline",
            "DfE template compliance",
        ],
        gov_requirement: "Must publish strategy statement by 31 December each year using DfE template. Must explain spending and impact.",
        quality_criteria: "Clear funding breakdown, Specific spending plans, Impact measurement methods, Template compliance",
        statutory_reference: "School Information (England) Regulations 2008, Pupil Premium Conditions of Grant",
    },
    ContentTypeSpec {
        id: "pe_sport",
        title: "PE and Sport Premium",
        description: "Create information about PE and sport premium funding usage, impact on pupil participation, and sustainability plans.",
        key_sections: &[
            "Funding amount received",
            "Breakdown of spending",
            "Impact on participation and attainment",
            "Sustainability plans",
            "Swimming attainment data",
        ],
        gov_requirement: "Must publish by 31 July each year. Must include swimming attainment data for Year 6 pupils.",
        quality_criteria: "Complete funding details, Detailed spending breakdown, Measurable impact data, Sustainability planning, Swimming standards",
        statutory_reference: "School Information (England) Regulations 2008, PE and Sport Premium Conditions of Grant",
    },
    ContentTypeSpec {
        id: "pay_gap",
        title: "Pay Gap Reporting",
        description: "Create gender and ethnicity pay gap information for schools with 250+ employees, including supporting narratives and action plans.",
        key_sections: &[
            "Gender pay gap data",
            "Ethnicity pay gap analysis",
            "Supporting narrative",
            "Action plans",
            "Data collection methods",
        ],
        gov_requirement: "Required for schools with 250+ employees. Must publish within one year of 31 March snapshot date.",
        quality_criteria: "Accurate pay gap data, Comprehensive analysis, Actionable improvement plans, Transparent methodology",
        statutory_reference: "Equality Act 2010 (Gender Pay Gap Information) Regulations 2017",
    },
    ContentTypeSpec {
        id: "ethos",
        title: "Ethos and Values",
        description: "Create a statement setting out the school's ethos and values that guides its operation and community.",
        key_sections: &[
            "School vision and mission",
            "Core values",
            "Ethos implementation",
            "Community engagement",
            "Character development",
        ],
        gov_requirement: "Recommended for all schools to publish. Should reflect the school's distinctive character and values.",
        quality_criteria: "Clear vision statement, Defined core values, Practical implementation examples, Community focus",
        statutory_reference: "School Information (England) Regulations 2008, Education Act 2002",
    },
    ContentTypeSpec {
        id: "school_uniform",
        title: "School Uniform Policy",
        description: "Create a comprehensive school uniform policy including required items, branding requirements, and purchasing information.",
        key_sections: &[
            "Required uniform items",
            "Branded vs generic items",
            "Seasonal variations",
            "Purchasing options",
            "Second-hand availability",
            "Cost considerations",
        ],
        gov_requirement: "Recommended for schools with uniform requirements. Should include cost-saving options and accessibility considerations.",
        quality_criteria: "Complete item listing, Branding specifications, Cost transparency, Accessibility provisions, Sustainability options",
        statutory_reference: "School Information (England) Regulations 2008, Guidance on the cost of school uniforms",
    },
    ContentTypeSpec {
        id: "school_hours",
        title: "School Opening Hours",
        description: "Create information about the official start and end times of the compulsory school day and total weekly hours.",
        key_sections: &[
            "Daily start time",
            "Daily end time",
            "Total weekly hours (including breaks)",
            "Term dates",
            "Holiday schedules",
        ],
        gov_requirement: "Recommended for all schools to publish. Should include total weekly hours of compulsory education.",
        quality_criteria: "Precise timing information, Complete weekly breakdown, Term structure details, Holiday information",
        statutory_reference: "School Information (England) Regulations 2008, Education Act 2002",
    },
    ContentTypeSpec {
        id: "send_report",
        title: "SEND Information Report",
        description: "Create a comprehensive report on special educational needs and disabilities provision, including admission arrangements and accessibility plans.",
        key_sections: &[
            "SEN information as per Schedule 1",
            "Admission arrangements for disabled pupils",
            "Anti-discrimination measures",
            "Accessibility plan",
            "Support services",
        ],
        gov_requirement: "Must publish annually. Must contain information specified in Schedule 1 to the SEND Regulations 2014.",
        quality_criteria: "Complete statutory requirements, Clear accessibility provisions, Detailed support information, Parent engagement",
        statutory_reference: "Children and Families Act 2014, SEND Regulations 2014",
    },
    ContentTypeSpec {
        id: "test_results",
        title: "Test, Exam & Assessment Results",
        description: "Create information about student performance in key stage assessments, including links to performance tables and detailed results.",
        key_sections: &[
            "Key Stage 2 results",
            "Key Stage 4 results (Progress 8, Attainment 8)",
            "Key Stage 5 results",
            "Destination measures",
            "Performance table links",
        ],
        gov_requirement: "Must publish link to performance tables. Must publish detailed results for KS2, KS4, and KS5 as published by Secretary of State.",
        quality_criteria: "Accurate performance data, Complete result coverage, Performance table integration, Trend analysis",
        statutory_reference: "School Information (England) Regulations 2008, Education Act 2005",
    },
    ContentTypeSpec {
        id: "equality_duty",
        title: "Public Sector Equality Duty",
        description: "Create information about compliance with the public sector equality duty, including equality objectives and impact assessments.",
        key_sections: &[
            "Equality compliance statement",
            "Equality objectives",
            "Impact assessments",
            "Monitoring arrangements",
            "Review timeline",
        ],
        gov_requirement: "Must publish details of compliance annually. Must publish equality objectives at least every 4 years.",
        quality_criteria: "Comprehensive compliance statement, Specific equality objectives, Impact assessment methodology, Monitoring framework",
        statutory_reference: "Equality Act 2010, Public Sector Equality Duty Regulations 2011",
    },
    ContentTypeSpec {
        id: "ofsted_report",
        title: "Ofsted Reports",
        description: "Create information about the school's Ofsted inspections, including either a copy of the report or a link to it on the Ofsted website.",
        key_sections: &[
            "Most recent Ofsted report",
            "Previous inspection reports",
            "Improvement actions",
            "Ofsted rating details",
            "Inspection framework alignment",
        ],
        gov_requirement: "Must publish either a copy of the most recent Ofsted report or a link to it on the Ofsted website.",
        quality_criteria: "Complete report information, Clear inspection outcomes, Improvement planning, Historical context",
        statutory_reference: "Education Act 2005, School Inspections Act 1996",
    },
    ContentTypeSpec {
        id: "contact_details",
        title: "Contact Details",
        description: "Create comprehensive contact information for the school, including postal address, phone number, and key staff contacts.",
        key_sections: &[
            "Postal address",
            "Telephone number",
            "Main contact person",
            "SENCO details",
            "Department contacts",
            "Emergency procedures",
        ],
        gov_requirement: "Must publish postal address, telephone number, and name of staff member who handles queries.",
        quality_criteria: "Complete contact information, Clear staff responsibilities, Multiple contact options, Accessibility considerations",
        statutory_reference: "School Information (England) Regulations 2008, Data Protection Act 2018",
    },
    ContentTypeSpec {
        id: "careers_programme",
        title: "Careers Programme (Years 7-13)",
        description: "Create comprehensive information about the school's careers guidance programme for pupils in years 7-13, including the careers lead, programme summary, impact measurement, and provider access policy.",
        key_sections: &[
            "Careers lead information",
            "Careers programme overview",
            "Provider access policy",
            "Impact measurement methods",
            "Parent and employer engagement",
            "Annual review date",
        ],
        gov_requirement: "Must comply with the School Information (England) Regulations 2008 and Section 42B of the Education Act 1997 (Provider Access Legislation). Must include careers lead details and provider access arrangements.",
        quality_criteria: "Clear careers lead information, Comprehensive programme details, Defined provider access policy, Impact assessment methods, Parent and employer engagement strategies",
        statutory_reference: "School Information (England) Regulations 2008, Education Act 1997 (Section 42B - Provider Access Legislation)",
    },
    ContentTypeSpec {
        id: "remote_education",
        title: "Remote Education Provision",
        description: "Create information about the school's remote education provision, including expectations for students and support for parents.",
        key_sections: &[
            "Remote learning expectations",
            "Technology requirements",
            "Student support",
            "Parent guidance",
            "Assessment methods",
            "Accessibility provisions",
        ],
        gov_requirement: "Recommended to publish information about remote education provision.",
        quality_criteria: "Clear expectations, Technical requirements, Support mechanisms, Accessibility considerations, Assessment approaches",
        statutory_reference: "Education (Pupil Registration) (England) Regulations 2006",
    },
    ContentTypeSpec {
        id: "safeguarding",
        title: "Safeguarding Policy",
        description: "Generate a comprehensive safeguarding policy framework covering statutory requirements, roles and responsibilities, procedures for reporting concerns, and staff training requirements. Note: This must be reviewed by designated safeguarding leads.",
        key_sections: &[
            "Statutory framework",
            "Designated Safeguarding Lead roles",
            "Recognition of abuse",
            "Reporting procedures",
            "Record keeping",
            "Staff training",
            "Inter-agency working",
            "Online safety",
        ],
        gov_requirement: "Must comply with \"Keeping Children Safe in Education\" (KCSIE) 2023. Must include specific procedures for online safety and peer-on-peer abuse.",
        quality_criteria: "Clear statutory references; Defined roles and responsibilities; Step-by-step reporting procedures; Staff training requirements; Parent communication protocols",
        statutory_reference: "Children Act 1989, Children Act 2004, Keeping Children Safe in Education (KCSIE) 2023",
    },
    ContentTypeSpec {
        id: "behaviour",
        title: "Behaviour Policy",
        description: "Create a positive behaviour policy covering expectations, rewards, sanctions, and support strategies. Include approaches for different age groups and consideration of SEND needs.",
        key_sections: &[
            "Behaviour expectations",
            "Rewards system",
            "Sanctions and consequences",
            "Support strategies",
            "SEND considerations",
            "Staff responsibilities",
            "Parent engagement",
        ],
        gov_requirement: "Must comply with the Education and Inspections Act 2006. Should include strategies for creating a positive learning environment.",
        quality_criteria: "Clear behaviour expectations; Positive reinforcement strategies; Consistent application of sanctions; Support for students with behavioural challenges; Staff training requirements",
        statutory_reference: "Education and Inspections Act 2006, School Discipline and Pupil Exclusions (England) Regulations 2012",
    },
    ContentTypeSpec {
        id: "complaints",
        title: "Complaints Policy",
        description: "Create a comprehensive complaints policy outlining procedures for handling complaints from parents, carers, and staff.",
        key_sections: &[
            "Complaints procedure",
            "Timelines for resolution",
            "Appeals process",
            "Record keeping",
            "Staff responsibilities",
        ],
        gov_requirement: "Must comply with the Education Act 2002. Must include arrangements for handling complaints about SEN support.",
        quality_criteria: "Clear complaint process; Defined timelines; Fair appeals process; Proper record keeping; Staff training requirements",
        statutory_reference: "Education Act 2002, Best practice guidance on school complaints procedures",
    },
    ContentTypeSpec {
        id: "charging_remissions",
        title: "Charging and Remissions Policy",
        description: "Create a policy detailing when the school charges for activities and the circumstances under which charges may be waived.",
        key_sections: &[
            "Charging principles",
            "Activities that may incur charges",
            "Remission criteria",
            "Application process",
            "Review procedures",
        ],
        gov_requirement: "Must comply with the Education Act 1996. Must clearly state which activities are free and which may incur charges.",
        quality_criteria: "Clear charging principles; Transparent remission criteria; Fair application process; Regular review arrangements",
        statutory_reference: "Education Act 1996, Charging for school activities guidance",
    },
    ContentTypeSpec {
        id: "data_protection",
        title: "Data Protection Policy",
        description: "Generate a GDPR-compliant data protection policy covering data handling, privacy notices, consent, and data subject rights in educational settings.",
        key_sections: &[
            "GDPR principles",
            "Lawful basis for processing",
            "Data subject rights",
            "Privacy notices",
            "Data security",
            "Breach procedures",
            "Staff responsibilities",
        ],
        gov_requirement: "Must comply with UK GDPR and Data Protection Act 2018. Must include specific procedures for handling pupil data and data breaches.",
        quality_criteria: "GDPR principles; Lawful basis for processing; Data subject rights; Privacy notices; Data security measures; Breach procedures; Staff training",
        statutory_reference: "UK GDPR, Data Protection Act 2018, Freedom of Information Act 2000",
    },
];
